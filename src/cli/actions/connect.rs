use crate::cli::commands::credentials;
use crate::portal::{AuthSession, Credentials, PortalConfig, Session, Transport, login};
use anyhow::{Context, Result, anyhow};
use tracing::warn;

/// Builds a transport for `endpoint` and logs in with `credentials`.
///
/// Portal errors are rendered with their user-facing message so the CLI shows
/// the same text the app would.
pub(crate) async fn logged_in(
    endpoint: &str,
    credentials: &credentials::Options,
) -> Result<(Transport, Session)> {
    let config = PortalConfig::new(endpoint).context("invalid portal endpoint")?;
    let transport =
        Transport::new(&config, AuthSession::new()).context("failed to build HTTP client")?;

    let credentials = Credentials::new(credentials.user_id.clone(), credentials.password.clone());
    let session = login(&transport, &credentials)
        .await
        .map_err(|err| anyhow!(err.user_message()).context("login failed"))?;

    if session.must_change_password() {
        warn!("the portal requires a password change for this account");
    }

    Ok((transport, session))
}
