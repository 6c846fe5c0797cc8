//! Auth session provider. A single [`AuthSession`] is created by the
//! composition root and handed to every component that needs the token (the
//! GraphQL transport, the student file cache, UI view models).
//!
//! All mutations are funnelled through one `watch::Sender`: replacing the token
//! and re-deriving its claims happen inside the same closure, so a reader can
//! never observe a new token paired with stale claims. Dependents may
//! `subscribe()` to be notified of every change.
//!
//! There is no refresh or expiry handling: a stale token is simply rejected by
//! the server on the next request.

pub mod claims;
pub mod store;

pub use self::claims::{Claims, DecodeError, decode_unverified};
pub use self::store::{Token, TokenStore};

use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn,
}

/// Consistent snapshot of the session.
#[derive(Clone, Debug, Default)]
pub struct Session {
    store: TokenStore,
    claims: Option<Claims>,
    password_prompt_dismissed: bool,
    generation: u64,
}

impl Session {
    fn replace_token(&mut self, token: Option<Token>) {
        self.claims = token.as_ref().and_then(derive_claims);
        self.store.set(token);
        self.password_prompt_dismissed = false;
        self.generation = self.generation.wrapping_add(1);
    }

    #[must_use]
    pub fn token(&self) -> Option<&Token> {
        self.store.get()
    }

    #[must_use]
    pub fn claims(&self) -> Option<&Claims> {
        self.claims.as_ref()
    }

    /// Whether the UI should prompt for a password change.
    #[must_use]
    pub fn must_change_password(&self) -> bool {
        !self.password_prompt_dismissed
            && self.claims.as_ref().is_some_and(|claims| claims.change_password)
    }

    /// An empty token string is held but counts as logged out.
    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.store.get().is_some_and(|token| !token.expose().is_empty()) {
            SessionState::LoggedIn
        } else {
            SessionState::LoggedOut
        }
    }

    /// Student number from the token claims, when present and non-empty.
    #[must_use]
    pub fn student_no(&self) -> Option<&str> {
        self.claims
            .as_ref()
            .map(|claims| claims.student_no.as_str())
            .filter(|no| !no.is_empty())
    }

    /// Counter bumped on every token change; lets caches tie entries to a token.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

// Decode failures mean "no claims"; they never reach callers.
fn derive_claims(token: &Token) -> Option<Claims> {
    match decode_unverified(token.expose()) {
        Ok(claims) => Some(claims),
        Err(err) => {
            debug!("token claims unavailable: {err}");
            None
        }
    }
}

/// Shared handle to the process-wide session. Cloning is cheap and every clone
/// observes the same state.
#[derive(Clone, Debug)]
pub struct AuthSession {
    tx: Arc<watch::Sender<Session>>,
}

impl Default for AuthSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthSession {
    /// Creates an empty, logged out session.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Session::default());
        Self { tx: Arc::new(tx) }
    }

    /// Stores a freshly issued token and derives its claims in one update.
    pub fn login(&self, token: impl Into<Token>) {
        self.set_token(Some(token.into()));
    }

    /// Replaces the token (or clears it with `None`).
    pub fn set_token(&self, token: Option<Token>) {
        match token {
            Some(token) => {
                self.tx.send_modify(|session| session.replace_token(Some(token)));
                let snapshot = self.tx.borrow();
                debug!(
                    student_no = snapshot.student_no().unwrap_or_default(),
                    must_change_password = snapshot.must_change_password(),
                    "session token updated"
                );
            }
            None => self.logout(),
        }
    }

    /// Clears the token and its claims. Calling it while logged out changes
    /// nothing and notifies nobody.
    pub fn logout(&self) {
        let changed = self.tx.send_if_modified(|session| {
            if session.token().is_none() {
                return false;
            }
            session.replace_token(None);
            true
        });
        if changed {
            debug!("session cleared");
        }
    }

    /// Hides the password change prompt for the current token only; the next
    /// token change re-evaluates it from the claims.
    pub fn dismiss_password_prompt(&self) {
        self.tx.send_if_modified(|session| {
            if session.must_change_password() {
                session.password_prompt_dismissed = true;
                true
            } else {
                false
            }
        });
    }

    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.tx.borrow().clone()
    }

    #[must_use]
    pub fn token(&self) -> Option<Token> {
        self.tx.borrow().token().cloned()
    }

    #[must_use]
    pub fn claims(&self) -> Option<Claims> {
        self.tx.borrow().claims().cloned()
    }

    #[must_use]
    pub fn must_change_password(&self) -> bool {
        self.tx.borrow().must_change_password()
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.tx.borrow().state()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.tx.borrow().generation()
    }

    /// Receiver notified on every session change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.tx.subscribe()
    }
}
