//! Filtering of a response down to the fields the user asked for.

use crate::response::ApiResponse;
use crate::selection::{FieldLabel, FieldSelection};
use serde_json::{Map, Value};

/// Selected response fields keyed by their output name.
///
/// A selected field the response does not carry keeps its key with no value.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    entries: Vec<(FieldLabel, Option<Value>)>,
}

impl Projection {
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(label, _)| label.key())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.keys().any(|k| k == key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(label, _)| label.key() == key)
            .and_then(|(_, value)| value.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// JSON object of the present values; absent ones are left out.
    pub fn to_json(&self) -> Value {
        let fields: Map<String, Value> = self
            .entries
            .iter()
            .filter_map(|(label, value)| Some((label.key().to_string(), value.clone()?)))
            .collect();
        Value::Object(fields)
    }

    /// Indented text shown in the output panel.
    pub fn render(&self) -> String {
        serde_json::to_string_pretty(&self.to_json()).unwrap_or_else(|_| "{}".to_string())
    }
}

pub fn project(response: &ApiResponse, selection: &FieldSelection) -> Projection {
    let entries = FieldLabel::all()
        .filter(|label| selection.contains(*label))
        .map(|label| (label, response.field(label.key()).cloned()))
        .collect();
    Projection { entries }
}
