use serde::{Deserialize, Serialize};

/// A named value substituted into request text via `{{name}}` placeholders.
/// The list is ordered for display; duplicate keys may coexist and are
/// applied in list order during substitution.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct EnvironmentVariable {
    pub key: String,
    pub value: String,
}
