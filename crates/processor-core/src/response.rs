use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body returned by the processing endpoint.
///
/// Only a handful of properties are interpreted; everything else is carried
/// along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiResponse(Map<String, Value>);

impl ApiResponse {
    /// `roll_number` when it is a non-empty string.
    pub fn roll_number(&self) -> Option<&str> {
        self.0
            .get("roll_number")
            .and_then(Value::as_str)
            .filter(|roll| !roll.is_empty())
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn numbers(&self) -> Option<&Value> {
        self.field("numbers")
    }

    pub fn alphabets(&self) -> Option<&Value> {
        self.field("alphabets")
    }

    pub fn highest_alphabet(&self) -> Option<&Value> {
        self.field("highest_alphabet")
    }
}

impl TryFrom<Value> for ApiResponse {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_interpreted_fields() {
        let response = ApiResponse::try_from(json!({
            "is_success": true,
            "roll_number": "X1",
            "numbers": ["1", "334"],
            "alphabets": ["A", "C", "z"],
            "highest_alphabet": ["z"]
        }))
        .unwrap();

        assert_eq!(response.roll_number(), Some("X1"));
        assert_eq!(response.numbers(), Some(&json!(["1", "334"])));
        assert_eq!(response.alphabets(), Some(&json!(["A", "C", "z"])));
        assert_eq!(response.highest_alphabet(), Some(&json!(["z"])));
        assert_eq!(response.field("is_success"), Some(&json!(true)));
    }

    #[test]
    fn test_roll_number_must_be_non_empty_string() {
        let empty = ApiResponse::try_from(json!({"roll_number": ""})).unwrap();
        assert_eq!(empty.roll_number(), None);

        let numeric = ApiResponse::try_from(json!({"roll_number": 42})).unwrap();
        assert_eq!(numeric.roll_number(), None);

        let absent = ApiResponse::try_from(json!({})).unwrap();
        assert_eq!(absent.roll_number(), None);
        assert_eq!(absent.numbers(), None);
    }

    #[test]
    fn test_non_object_bodies_are_rejected() {
        assert!(ApiResponse::try_from(json!(["z"])).is_err());
        assert!(ApiResponse::try_from(Value::Null).is_err());
    }
}
