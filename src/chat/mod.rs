mod service;

pub use service::{ChatService, EMPTY_INPUT_MESSAGE};
