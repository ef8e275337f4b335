use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub api_key: String,
    pub sender_id: String,
}

impl Credentials {
    /// Both fields must be non-empty for the record to count as configured.
    pub fn is_complete(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.sender_id.trim().is_empty()
    }
}
