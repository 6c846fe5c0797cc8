//! Maps validated CLI matches to an [`Action`].

use crate::cli::actions::{Action, check_password, login, profile, results};
use crate::cli::commands::{
    ARG_CONFIRM_PASSWORD, ARG_NEW_PASSWORD, CMD_CHECK_PASSWORD, CMD_LOGIN, CMD_PROFILE,
    CMD_RESULTS, credentials, endpoint,
};
use anyhow::{Context, Result};
use secrecy::SecretString;

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if required arguments are missing or the subcommand is unknown.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let endpoint = endpoint::Options::parse(matches).url;

    match matches.subcommand() {
        Some((CMD_LOGIN, _)) => Ok(Action::Login(login::Args {
            endpoint,
            credentials: credentials::Options::parse(matches)?,
        })),
        Some((CMD_PROFILE, _)) => Ok(Action::Profile(profile::Args {
            endpoint,
            credentials: credentials::Options::parse(matches)?,
        })),
        Some((CMD_RESULTS, _)) => Ok(Action::Results(results::Args {
            endpoint,
            credentials: credentials::Options::parse(matches)?,
        })),
        Some((CMD_CHECK_PASSWORD, sub_m)) => {
            let value = |id: &str| {
                sub_m
                    .get_one::<String>(id)
                    .cloned()
                    .map(SecretString::from)
                    .with_context(|| format!("missing required argument: --{id}"))
            };
            Ok(Action::CheckPassword(check_password::Args {
                new_password: value(ARG_NEW_PASSWORD)?,
                confirmation: value(ARG_CONFIRM_PASSWORD)?,
            }))
        }
        _ => anyhow::bail!("missing subcommand"),
    }
}
