//! Last loaded student file, shared between screens.
//!
//! Entries are tied to the session generation they were loaded under, so
//! logging out or logging in as someone else hides them immediately.

use crate::portal::{
    models::StudentFile,
    session::{AuthSession, SessionState},
};
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Clone, Debug)]
struct Entry {
    generation: u64,
    file: StudentFile,
}

#[derive(Clone, Debug)]
pub struct StudentFileCache {
    session: AuthSession,
    entry: Arc<RwLock<Option<Entry>>>,
}

impl StudentFileCache {
    #[must_use]
    pub fn new(session: AuthSession) -> Self {
        Self {
            session,
            entry: Arc::new(RwLock::new(None)),
        }
    }

    /// Cached file for the current token, if any.
    #[must_use]
    pub fn get(&self) -> Option<StudentFile> {
        let session = self.session.snapshot();
        if session.state() == SessionState::LoggedOut {
            return None;
        }

        let entry = self.entry.read().unwrap_or_else(PoisonError::into_inner);
        entry
            .as_ref()
            .filter(|entry| entry.generation == session.generation())
            .map(|entry| entry.file.clone())
    }

    /// Stores `file` as loaded under `generation`. A file loaded under an
    /// older generation is kept out of sight by [`Self::get`].
    pub fn insert(&self, generation: u64, file: StudentFile) {
        let mut entry = self.entry.write().unwrap_or_else(PoisonError::into_inner);
        *entry = Some(Entry { generation, file });
    }

    pub fn clear(&self) {
        let mut entry = self.entry.write().unwrap_or_else(PoisonError::into_inner);
        *entry = None;
    }
}
