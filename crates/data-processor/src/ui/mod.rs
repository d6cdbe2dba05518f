pub mod app;
pub mod fields;
pub mod footer;
pub mod form;
pub mod header;
pub mod output;
