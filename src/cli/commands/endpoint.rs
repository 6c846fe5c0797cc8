use crate::portal::config::DEFAULT_ENDPOINT;
use clap::{Arg, ArgMatches, Command};

pub const ARG_ENDPOINT: &str = "endpoint";

#[derive(Debug, Clone)]
pub struct Options {
    pub url: String,
}

impl Options {
    /// Parse the portal endpoint from matches, falling back to the default
    /// endpoint when the value is blank.
    #[must_use]
    pub fn parse(matches: &ArgMatches) -> Self {
        let url = matches
            .get_one::<String>(ARG_ENDPOINT)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Self { url }
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_ENDPOINT)
            .short('e')
            .long(ARG_ENDPOINT)
            .help("Portal GraphQL endpoint")
            .env("STUDENT_PORTAL_ENDPOINT")
            .default_value(DEFAULT_ENDPOINT)
            .global(true),
    )
}
