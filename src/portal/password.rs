//! Client-side checks for the "create new password" form.

use thiserror::Error;

pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password must be at least 8 characters long")]
    TooShort,
    #[error("Passwords do not match")]
    Mismatch,
}

/// Checks a new password against its confirmation. Length is counted in
/// UTF-16 code units, the unit the portal forms use, so a character outside
/// the Basic Multilingual Plane (most emoji) counts twice.
///
/// # Errors
///
/// Returns [`PasswordPolicyError::TooShort`] before checking the confirmation,
/// then [`PasswordPolicyError::Mismatch`].
pub fn validate_new_password(new_password: &str, confirmation: &str) -> Result<(), PasswordPolicyError> {
    if new_password.encode_utf16().count() < MIN_PASSWORD_LENGTH {
        return Err(PasswordPolicyError::TooShort);
    }
    if new_password != confirmation {
        return Err(PasswordPolicyError::Mismatch);
    }
    Ok(())
}
