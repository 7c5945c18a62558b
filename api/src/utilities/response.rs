use reqwest::StatusCode;
use serde_json::Value;

use crate::domain::response::ApiResponse;

/// Normalizes one settled HTTP call into an `ApiResponse`. The body is parsed
/// as JSON opportunistically; a malformed body is kept as raw text and never
/// surfaces as an error.
pub fn build_response(
    status: StatusCode,
    headers: Vec<(String, String)>,
    body_text: String,
    time_ms: u128,
) -> ApiResponse {
    let size = body_text.len() as u64;
    let data = match serde_json::from_str::<Value>(&body_text) {
        Ok(json) => json,
        Err(_) => Value::String(body_text),
    };
    ApiResponse {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or("").to_string(),
        headers,
        data,
        time: time_ms,
        size,
    }
}
