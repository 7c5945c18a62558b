use super::request::ApiRequest;

/// History keeps the 50 most recent sends, newest first.
pub const HISTORY_LIMIT: usize = 50;

/// Prepends an entry and silently evicts the oldest past the cap.
pub fn push_entry(history: &mut Vec<ApiRequest>, entry: ApiRequest) {
    history.insert(0, entry);
    history.truncate(HISTORY_LIMIT);
}
