//! # Studentportal
//!
//! Client core for the student portal: it keeps the login token, decodes its
//! claims and attaches it to every GraphQL call.
//!
//! ## Session
//!
//! [`portal::AuthSession`] is the single source of truth for the bearer token.
//! Setting a token re-derives the decoded [`portal::Claims`] in the same step,
//! so readers never see a token paired with another token's claims. Claims are
//! decoded **without** verifying the signature; they only drive UI decisions
//! such as the "change your password" prompt. The server remains the
//! authority.
//!
//! ## Transport
//!
//! [`portal::Transport`] posts GraphQL operations to the configured endpoint
//! with `Authorization: Bearer <token>` (omitted when logged out) and
//! `x-portal-type: student`. Errors are passed through to the caller as-is.

pub mod cli;
pub mod portal;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
