use crate::cli::actions::{Action, check_password, login, profile, results};
use anyhow::Result;

/// Execute the provided action.
// Single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Login(args) => login::execute(args).await,
        Action::Profile(args) => profile::execute(args).await,
        Action::Results(args) => results::execute(args).await,
        Action::CheckPassword(args) => check_password::execute(&args),
    }
}
