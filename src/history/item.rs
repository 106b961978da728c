use crate::detection::Verdict;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A successful scan, frozen at the moment it was recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub file_name: String,
    #[serde(flatten)]
    pub verdict: Verdict,
}

impl HistoryItem {
    pub fn new(verdict: Verdict, file_name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            file_name: file_name.into(),
            verdict,
        }
    }
}
