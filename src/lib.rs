pub mod chat;
pub mod config;
pub mod error;
pub mod inference;
pub mod prompt;
pub mod server;
pub mod shaper;
pub mod transcript;
pub mod voice;

pub use error::{Error, Result};
