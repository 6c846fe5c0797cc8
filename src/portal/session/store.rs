//! In-memory holder for the bearer token. Nothing is persisted; restarting the
//! process starts logged out.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// Opaque bearer token issued by the portal API.
#[derive(Clone)]
pub struct Token(SecretString);

impl Token {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretString::from(value.into()))
    }

    /// Raw token value, for building the `Authorization` header.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl Eq for Token {}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Holds the current token. Accepts any value without validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenStore {
    token: Option<Token>,
}

impl TokenStore {
    #[must_use]
    pub fn get(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    /// Replaces the stored token and returns the previous one.
    pub fn set(&mut self, token: Option<Token>) -> Option<Token> {
        std::mem::replace(&mut self.token, token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        assert!(TokenStore::default().get().is_none());
    }

    #[test]
    fn set_returns_previous_token() {
        let mut store = TokenStore::default();
        assert_eq!(store.set(Some(Token::from("a"))), None);
        assert_eq!(store.set(Some(Token::from("b"))), Some(Token::from("a")));
        assert_eq!(store.get().map(Token::expose), Some("b"));
        assert_eq!(store.set(None), Some(Token::from("b")));
        assert!(store.get().is_none());
    }

    #[test]
    fn accepts_arbitrary_strings() {
        let mut store = TokenStore::default();
        store.set(Some(Token::from("")));
        assert_eq!(store.get().map(Token::expose), Some(""));
    }

    #[test]
    fn debug_redacts_token() {
        let token = Token::from("super-secret");
        let rendered = format!("{token:?}");
        assert!(!rendered.contains("super-secret"));
        assert_eq!(rendered, "Token(***)");
    }
}
