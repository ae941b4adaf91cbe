use crate::inference::InferenceClient;
use crate::prompt::QueryKind;
use crate::shaper::shorten;
use crate::transcript::Transcript;
use tracing::{debug, warn};

/// Shown when a trigger arrives with nothing to ask. Nothing is recorded.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a question first.";

/// Runs one user action end to end: template, inference, truncation,
/// transcript append. Every outcome, including failure, is a display string.
pub struct ChatService {
    client: Box<dyn InferenceClient>,
}

impl ChatService {
    pub fn new(client: Box<dyn InferenceClient>) -> Self {
        Self { client }
    }

    pub async fn answer(
        &self,
        transcript: &mut Transcript,
        kind: QueryKind,
        input: &str,
    ) -> String {
        let Some(prompt) = kind.render(input) else {
            return EMPTY_INPUT_MESSAGE.to_string();
        };

        debug!("Answering {:?} query ({} chars)", kind, input.len());

        let reply = match self.client.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Generation failed for {:?} query: {}", kind, e);
                e.user_message()
            }
        };

        let reply = shorten(&reply);
        transcript.record(input.trim(), reply.clone());
        reply
    }
}
