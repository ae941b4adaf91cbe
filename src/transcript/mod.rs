mod store;
mod types;

pub use store::{DISPLAY_WINDOW, SessionRegistry, Transcript};
pub use types::TranscriptEntry;
