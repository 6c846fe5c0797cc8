use clap::{Arg, ArgMatches, Command};
use secrecy::SecretString;

pub const ARG_USER_ID: &str = "user-id";
pub const ARG_PASSWORD: &str = "password";

#[derive(Debug, Clone)]
pub struct Options {
    pub user_id: String,
    pub password: SecretString,
}

impl Options {
    /// Parse login credentials from matches.
    ///
    /// # Errors
    /// Returns an error if the user id or password is missing or blank.
    pub fn parse(matches: &ArgMatches) -> anyhow::Result<Self> {
        let get_non_empty = |id: &str| {
            matches
                .get_one::<String>(id)
                .cloned()
                .filter(|v| !v.trim().is_empty())
        };

        let Some(user_id) = get_non_empty(ARG_USER_ID) else {
            anyhow::bail!("missing required argument: --{ARG_USER_ID}");
        };
        let Some(password) = get_non_empty(ARG_PASSWORD) else {
            anyhow::bail!("missing required argument: --{ARG_PASSWORD}");
        };

        Ok(Self {
            user_id: user_id.trim().to_string(),
            password: SecretString::from(password),
        })
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_USER_ID)
                .short('u')
                .long(ARG_USER_ID)
                .help("Student number or registration number used to log in")
                .env("STUDENT_PORTAL_USER_ID")
                .global(true),
        )
        .arg(
            Arg::new(ARG_PASSWORD)
                .long(ARG_PASSWORD)
                .help("Portal password")
                .env("STUDENT_PORTAL_PASSWORD")
                .hide_env_values(true)
                .global(true),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn cleared<F, R>(f: F) -> R
    where
        F: FnOnce() -> R,
    {
        temp_env::with_vars(
            [
                ("STUDENT_PORTAL_USER_ID", None::<&str>),
                ("STUDENT_PORTAL_PASSWORD", None::<&str>),
            ],
            f,
        )
    }

    #[test]
    fn test_parse_from_args() -> anyhow::Result<()> {
        cleared(|| {
            let matches = with_args(Command::new("test")).get_matches_from(vec![
                "test",
                "--user-id",
                " 2000100121 ",
                "--password",
                "secret",
            ]);
            let options = Options::parse(&matches)?;
            assert_eq!(options.user_id, "2000100121");
            assert_eq!(options.password.expose_secret(), "secret");
            Ok(())
        })
    }

    #[test]
    fn test_parse_from_env() -> anyhow::Result<()> {
        temp_env::with_vars(
            [
                ("STUDENT_PORTAL_USER_ID", Some("2000100121")),
                ("STUDENT_PORTAL_PASSWORD", Some("secret")),
            ],
            || {
                let matches = with_args(Command::new("test")).get_matches_from(vec!["test"]);
                let options = Options::parse(&matches)?;
                assert_eq!(options.user_id, "2000100121");
                Ok(())
            },
        )
    }

    #[test]
    fn test_missing_password() {
        cleared(|| {
            let matches = with_args(Command::new("test"))
                .get_matches_from(vec!["test", "--user-id", "2000100121"]);
            let result = Options::parse(&matches);
            assert!(result.is_err());
            if let Err(err) = result {
                assert!(err.to_string().contains("--password"));
            }
        });
    }

    #[test]
    fn test_debug_hides_password() -> anyhow::Result<()> {
        cleared(|| {
            let matches = with_args(Command::new("test")).get_matches_from(vec![
                "test",
                "--user-id",
                "2000100121",
                "--password",
                "hunter22",
            ]);
            let options = Options::parse(&matches)?;
            assert!(!format!("{options:?}").contains("hunter22"));
            Ok(())
        })
    }
}
