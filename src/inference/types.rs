use serde::Serialize;
use thiserror::Error;

/// Request body understood by the hosted inference API.
#[derive(Debug, Serialize)]
pub struct InferencePayload<'a> {
    pub inputs: &'a str,
}

/// Why a generation attempt produced no text. Every kind resolves to a fixed
/// display literal via [`InferenceError::user_message`]; none of them ends
/// the session.
#[derive(Debug, Clone, Error)]
pub enum InferenceError {
    #[error("inference endpoint unreachable: {0}")]
    Network(String),

    #[error("inference endpoint returned status {0}")]
    UpstreamStatus(u16),

    #[error("inference response body was not valid JSON")]
    InvalidBody,

    #[error("inference response carried no candidates")]
    EmptyCandidates,

    #[error("inference candidate was missing the generated text field")]
    MissingField,
}

impl InferenceError {
    /// The literal shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Check your internet connection.".to_string(),
            Self::UpstreamStatus(code) => {
                format!("API request failed with status code {code}")
            }
            Self::InvalidBody => "Invalid API response.".to_string(),
            Self::EmptyCandidates | Self::MissingField => {
                "Sorry, I couldn't understand that.".to_string()
            }
        }
    }
}
