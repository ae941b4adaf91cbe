use super::TranscriptEntry;
use crate::{Error, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Mutex as AsyncMutex;
use tracing::{debug, info};
use uuid::Uuid;

/// Number of exchanges shown when a transcript is displayed.
pub const DISPLAY_WINDOW: usize = 5;

/// Append-only session history. All entries are retained for the session
/// lifetime; only the display window is ever shown.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, query: impl Into<String>, reply: impl Into<String>) {
        self.entries
            .push(TranscriptEntry::new(query.into(), reply.into()));
    }

    /// Full history, oldest first.
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// The last [`DISPLAY_WINDOW`] exchanges, oldest of the shown window
    /// first.
    pub fn window(&self) -> &[TranscriptEntry] {
        let start = self.entries.len().saturating_sub(DISPLAY_WINDOW);
        &self.entries[start..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Owns one transcript per live session. Transcripts exist only in memory
/// and are dropped when their session ends.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<String, Arc<AsyncMutex<Transcript>>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the transcript for `session_id`, creating the session when the
    /// id is unknown. A fresh id is generated when none is supplied.
    ///
    /// The returned lock serializes interactions within one session; distinct
    /// sessions proceed independently.
    pub fn open(
        &self,
        session_id: Option<String>,
    ) -> Result<(String, Arc<AsyncMutex<Transcript>>)> {
        let id = session_id.unwrap_or_else(|| Uuid::new_v4().to_string());

        let mut sessions = self
            .sessions
            .lock()
            .map_err(|e| Error::internal(format!("Mutex lock failed: {e}")))?;

        let transcript = sessions
            .entry(id.clone())
            .or_insert_with(|| {
                debug!("Created session: {}", id);
                Arc::new(AsyncMutex::new(Transcript::new()))
            })
            .clone();

        Ok((id, transcript))
    }

    /// Transcript lookup without creating a session.
    pub fn get(&self, session_id: &str) -> Result<Arc<AsyncMutex<Transcript>>> {
        let sessions = self
            .sessions
            .lock()
            .map_err(|e| Error::internal(format!("Mutex lock failed: {e}")))?;

        sessions
            .get(session_id)
            .cloned()
            .ok_or_else(|| Error::SessionNotFound {
                session_id: session_id.to_string(),
            })
    }

    /// Ends a session, dropping its transcript.
    pub fn end(&self, session_id: &str) -> Result<()> {
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|e| Error::internal(format!("Mutex lock failed: {e}")))?;

        match sessions.remove(session_id) {
            Some(_) => {
                info!("Ended session: {}", session_id);
                Ok(())
            }
            None => Err(Error::SessionNotFound {
                session_id: session_id.to_string(),
            }),
        }
    }
}
