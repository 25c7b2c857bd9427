use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key of the array being reindexed.
pub const PORTFOLIO_KEY: &str = "portfolio";

/// A portfolio document: the top-level JSON object of the file.
///
/// All members are held as raw JSON values. Member order is preserved
/// through the read-modify-write cycle (serde_json's `preserve_order`
/// feature), so everything except the stamped `id` members round-trips
/// byte-for-byte modulo whitespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Document {
    /// Wrap a parsed JSON value. Returns None if the value is not an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// Consume the wrapper and return the underlying JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

/// JSON type name for error messages
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
