use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized result of one dispatch. `data` holds the parsed JSON value, or
/// `Value::String` with the raw body when the body is not valid JSON. `size`
/// is the byte length of the raw body text, not of any re-serialized form.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: Vec<(String, String)>,
    pub data: Value,
    pub time: u128,
    pub size: u64,
}

impl ApiResponse {
    /// Body as the user would copy it: pretty-printed when structured,
    /// verbatim when the body was raw text.
    pub fn body_text(&self) -> String {
        match &self.data {
            Value::String(raw) => raw.clone(),
            other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
        }
    }

    /// Raw body without pretty-printing.
    pub fn raw_text(&self) -> String {
        match &self.data {
            Value::String(raw) => raw.clone(),
            other => other.to_string(),
        }
    }
}
