use serde::{Deserialize, Serialize};

use super::request::ApiRequest;

/// A named, durable snapshot of a request configuration, distinct from
/// transient history. The id is the millisecond timestamp of the save action.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedRequest {
    pub id: String,
    pub name: String,
    pub request: ApiRequest,
    pub created_at: String,
}

impl SavedRequest {
    pub fn new(name: String, request: ApiRequest) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: now.timestamp_millis().to_string(),
            name,
            request,
            created_at: now.to_rfc3339(),
        }
    }
}

pub fn delete_by_id(saved: &mut Vec<SavedRequest>, id: &str) {
    saved.retain(|s| s.id != id);
}
