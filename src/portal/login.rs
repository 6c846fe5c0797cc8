//! Login flow: run the mutation, then hand the token to the session.

use crate::portal::{
    error::Error,
    operations,
    session::Session,
    transport::Transport,
};
use secrecy::SecretString;
use std::fmt;
use tracing::{debug, instrument};

/// Credentials typed into the login form.
#[derive(Clone)]
pub struct Credentials {
    pub user_id: String,
    pub password: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new(user_id: impl Into<String>, password: SecretString) -> Self {
        Self {
            user_id: user_id.into(),
            password,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user_id", &self.user_id)
            .field("password", &"***")
            .finish()
    }
}

/// Logs in and stores the issued token in the transport's session.
///
/// On failure the session is left exactly as it was and the error is returned
/// unchanged for the UI to display.
///
/// # Errors
///
/// Passes through transport and GraphQL errors from the login mutation.
#[instrument(skip(transport, credentials), fields(user_id = %credentials.user_id))]
pub async fn login(transport: &Transport, credentials: &Credentials) -> Result<Session, Error> {
    let token = operations::login_mutation(transport, &credentials.user_id, &credentials.password)
        .await?;

    transport.session().login(token);
    let session = transport.session().snapshot();
    debug!(
        must_change_password = session.must_change_password(),
        "login succeeded"
    );

    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portal::{
        config::PortalConfig,
        session::{AuthSession, SessionState, Token, claims::tests::token_with},
    };
    use anyhow::{Result, anyhow};
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn credentials() -> Credentials {
        Credentials::new("2000100121", SecretString::from("secret".to_string()))
    }

    #[test]
    fn debug_redacts_password() {
        let rendered = format!("{:?}", credentials());
        assert!(rendered.contains("2000100121"));
        assert!(!rendered.contains("secret"));
    }

    #[tokio::test]
    async fn login_then_logout_round_trip() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        let token = token_with(&json!({ "change_password": true, "student_no": "2000100121" }));

        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "variables": { "userId": "2000100121", "password": "secret" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "studentPortalLogin": { "token": token } }
            })))
            .mount(&server)
            .await;

        let session = AuthSession::new();
        let transport = Transport::new(&PortalConfig::new(&server.uri())?, session.clone())?;

        let snapshot = login(&transport, &credentials()).await?;
        assert_eq!(snapshot.token(), Some(&Token::new(token.clone())));
        assert!(snapshot.must_change_password());
        assert_eq!(snapshot.student_no(), Some("2000100121"));
        assert!(session.must_change_password());

        session.logout();
        assert!(session.token().is_none());
        assert!(!session.must_change_password());
        Ok(())
    }

    #[tokio::test]
    async fn failed_login_leaves_session_logged_out() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": null,
                "errors": [{ "message": "Invalid user ID or password" }]
            })))
            .mount(&server)
            .await;

        let session = AuthSession::new();
        let transport = Transport::new(&PortalConfig::new(&server.uri())?, session.clone())?;

        let err = login(&transport, &credentials())
            .await
            .err()
            .ok_or_else(|| anyhow!("expected error"))?;
        assert_eq!(err.user_message(), "Invalid user ID or password");
        assert_eq!(session.state(), SessionState::LoggedOut);
        assert!(!session.must_change_password());
        Ok(())
    }

    #[tokio::test]
    async fn failed_login_keeps_existing_session() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let session = AuthSession::new();
        session.login("held");
        let transport = Transport::new(&PortalConfig::new(&server.uri())?, session.clone())?;

        assert!(login(&transport, &credentials()).await.is_err());
        assert_eq!(session.token(), Some(Token::from("held")));
        Ok(())
    }
}
