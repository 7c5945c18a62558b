use serde::{Deserialize, Serialize};

/// Mutually exclusive top-level tabs. A successful dispatch forces RESPONSE;
/// loading a history or saved entry forces REQUEST.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActiveTab {
    REQUEST,
    RESPONSE,
    HISTORY,
    ENVIRONMENT,
}

/// Sub-views of the response panel.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ResponseViewMode {
    JSON,
    RAW,
    HEADERS,
}
