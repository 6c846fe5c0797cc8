use crate::cli::{actions::connect::logged_in, commands::credentials};
use crate::portal::{StudentFileCache, operations};
use anyhow::{Result, anyhow};

#[derive(Debug)]
pub struct Args {
    pub endpoint: String,
    pub credentials: credentials::Options,
}

/// Log in and print the student file.
/// # Errors
/// Returns an error if the login or the query fails.
pub async fn execute(args: Args) -> Result<()> {
    let (transport, _) = logged_in(&args.endpoint, &args.credentials).await?;
    let cache = StudentFileCache::new(transport.session().clone());

    let file = operations::load_student_file_cached(&transport, &cache)
        .await
        .map_err(|err| anyhow!(err.user_message()).context("failed to load student file"))?;

    println!("{}", serde_json::to_string_pretty(&file)?);

    transport.session().logout();
    Ok(())
}
