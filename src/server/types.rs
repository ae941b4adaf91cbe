use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub session_id: String,
    pub output: String,
}

#[derive(Debug, Deserialize)]
pub struct TranscribeRequest {
    pub audio_base64: String,
    #[serde(default)]
    pub format: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TranscribeResponse {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub session_id: String,
    pub entries: Vec<TranscriptEntryView>,
}

#[derive(Debug, Serialize)]
pub struct TranscriptEntryView {
    pub query: String,
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
