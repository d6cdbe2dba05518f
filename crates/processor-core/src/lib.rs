//! # Processor Core
//!
//! Everything the Data Processor form does, independent of the terminal UI:
//! capturing the pasted text, checking it, forwarding it to the processing
//! endpoint and filtering the response down to the chosen fields.
//!
//! ## Modules
//!
//! - `input`: raw text of the input area
//! - `validator`: shallow JSON check run before any request
//! - `client`: the `Invoker` seam and its HTTP implementation
//! - `response`: the endpoint's reply
//! - `selection` / `projection`: field choice and the filtered view
//! - `state`: immutable form state and submit-cycle transitions
//! - `processor`: convenience driver around the state and an invoker
//! - `settings`, `theme`: configuration and styling

pub mod client;
pub mod input;
pub mod processor;
pub mod projection;
pub mod response;
pub mod selection;
pub mod settings;
pub mod state;
pub mod theme;
pub mod validator;

pub use client::{HttpInvoker, InvocationError, Invoker};
pub use processor::Processor;
pub use state::{Action, Effect, FormState, Phase, RequestToken, SubmitError};
