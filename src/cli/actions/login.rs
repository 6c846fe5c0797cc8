use crate::cli::{actions::connect::logged_in, commands::credentials};
use anyhow::Result;
use serde::Serialize;

#[derive(Debug)]
pub struct Args {
    pub endpoint: String,
    pub credentials: credentials::Options,
}

#[derive(Debug, Serialize)]
struct Output<'a> {
    student_no: Option<&'a str>,
    must_change_password: bool,
    expires_at: Option<i64>,
}

/// Log in and print the resulting session.
/// # Errors
/// Returns an error if the login fails.
pub async fn execute(args: Args) -> Result<()> {
    let (transport, session) = logged_in(&args.endpoint, &args.credentials).await?;

    let output = Output {
        student_no: session.student_no(),
        must_change_password: session.must_change_password(),
        expires_at: session.claims().and_then(|claims| claims.exp),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    transport.session().logout();
    Ok(())
}
