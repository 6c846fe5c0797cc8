use crate::portal::password::validate_new_password;
use anyhow::Result;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

#[derive(Debug)]
pub struct Args {
    pub new_password: SecretString,
    pub confirmation: SecretString,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct Output {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

fn check(args: &Args) -> Output {
    match validate_new_password(
        args.new_password.expose_secret(),
        args.confirmation.expose_secret(),
    ) {
        Ok(()) => Output {
            valid: true,
            message: None,
        },
        Err(err) => Output {
            valid: false,
            message: Some(err.to_string()),
        },
    }
}

/// Run the new password policy and print the verdict.
/// # Errors
/// Returns an error if the password is rejected.
pub fn execute(args: &Args) -> Result<()> {
    let output = check(args);
    println!("{}", serde_json::to_string_pretty(&output)?);

    match output.message {
        Some(message) if !output.valid => anyhow::bail!(message),
        _ => Ok(()),
    }
}
