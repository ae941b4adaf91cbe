use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One question/answer exchange. The reply is stored post-truncation; raw
/// model output never reaches the transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub query: String,
    pub reply: String,
    pub created_at: DateTime<Utc>,
}

impl TranscriptEntry {
    pub fn new(query: String, reply: String) -> Self {
        Self {
            query,
            reply,
            created_at: Utc::now(),
        }
    }
}
