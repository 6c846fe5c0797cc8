pub mod credentials;
pub mod endpoint;
pub mod logging;

use clap::{
    Arg, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

pub const CMD_LOGIN: &str = "login";
pub const CMD_PROFILE: &str = "profile";
pub const CMD_RESULTS: &str = "results";
pub const CMD_CHECK_PASSWORD: &str = "check-password";

pub const ARG_NEW_PASSWORD: &str = "new";
pub const ARG_CONFIRM_PASSWORD: &str = "confirm";

fn check_password() -> Command {
    Command::new(CMD_CHECK_PASSWORD)
        .about("Check a new password against the portal password policy")
        .arg(
            Arg::new(ARG_NEW_PASSWORD)
                .long(ARG_NEW_PASSWORD)
                .help("New password")
                .required(true),
        )
        .arg(
            Arg::new(ARG_CONFIRM_PASSWORD)
                .long(ARG_CONFIRM_PASSWORD)
                .help("New password, typed again")
                .required(true),
        )
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("studentportal")
        .about("Student portal client")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(CMD_LOGIN)
                .about("Log in and print the session (student number, password change flag)"),
        )
        .subcommand(Command::new(CMD_PROFILE).about("Log in and print the student file"))
        .subcommand(
            Command::new(CMD_RESULTS).about("Log in and print course results grouped by semester"),
        )
        .subcommand(check_password());

    let command = endpoint::with_args(command);
    let command = credentials::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleared<F, R>(f: F) -> R
    where
        F: FnOnce() -> R,
    {
        temp_env::with_vars(
            [
                ("STUDENT_PORTAL_ENDPOINT", None::<&str>),
                ("STUDENT_PORTAL_USER_ID", None::<&str>),
                ("STUDENT_PORTAL_PASSWORD", None::<&str>),
                ("STUDENT_PORTAL_LOG_LEVEL", None::<&str>),
            ],
            f,
        )
    }

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "studentportal");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Student portal client".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_global_args_after_subcommand() {
        cleared(|| {
            let matches = new().get_matches_from(vec![
                "studentportal",
                "results",
                "--endpoint",
                "https://portal.example.ac.ug/graphql",
                "--user-id",
                "2000100121",
                "--password",
                "secret",
            ]);
            assert_eq!(matches.subcommand_name(), Some(CMD_RESULTS));
            assert_eq!(
                matches.get_one::<String>(endpoint::ARG_ENDPOINT).cloned(),
                Some("https://portal.example.ac.ug/graphql".to_string())
            );
            assert_eq!(
                matches.get_one::<String>(credentials::ARG_USER_ID).cloned(),
                Some("2000100121".to_string())
            );
        });
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("STUDENT_PORTAL_ENDPOINT", Some("https://portal.example.ac.ug/graphql")),
                ("STUDENT_PORTAL_USER_ID", Some("2000100121")),
                ("STUDENT_PORTAL_PASSWORD", Some("secret")),
                ("STUDENT_PORTAL_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["studentportal", "login"]);
                assert_eq!(
                    matches.get_one::<String>(endpoint::ARG_ENDPOINT).cloned(),
                    Some("https://portal.example.ac.ug/graphql".to_string())
                );
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
            },
        );
    }

    #[test]
    fn test_check_log_level_verbosity() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            cleared(|| {
                let mut args = vec!["studentportal".to_string(), "login".to_string()];
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_subcommand_required() {
        cleared(|| {
            let result = new().try_get_matches_from(vec!["studentportal"]);
            assert!(result.is_err());
        });
    }

    #[test]
    fn test_check_password_requires_both_values() {
        cleared(|| {
            let result = new().try_get_matches_from(vec![
                "studentportal",
                "check-password",
                "--new",
                "longenough",
            ]);
            assert_eq!(
                result.map_err(|e| e.kind()).err(),
                Some(clap::error::ErrorKind::MissingRequiredArgument)
            );
        });
    }

    #[test]
    fn test_unknown_subcommand_fails() {
        cleared(|| {
            let result = new().try_get_matches_from(vec!["studentportal", "serve"]);
            assert_eq!(
                result.map_err(|e| e.kind()).err(),
                Some(clap::error::ErrorKind::InvalidSubcommand)
            );
        });
    }
}
