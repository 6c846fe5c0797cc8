//! Authenticated GraphQL transport. Every outgoing request reads the current
//! token from the shared [`AuthSession`], so a login or logout takes effect on
//! the very next call. Failures are handed back untouched: no retry, no
//! timeout, no caching.

use crate::portal::{
    config::PortalConfig,
    error::Error,
    graphql::{Operation, OperationErrors, Response},
    session::AuthSession,
};
use reqwest::{
    Client, StatusCode,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{Instrument, debug, info_span};
use url::Url;

/// Header telling the API which portal the request comes from.
pub const PORTAL_TYPE_HEADER: &str = "x-portal-type";
pub const PORTAL_TYPE: &str = "student";

#[derive(Clone, Debug)]
pub struct Transport {
    client: Client,
    endpoint: Url,
    session: AuthSession,
}

impl Transport {
    /// Builds a transport for `config.endpoint` that authenticates with `session`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &PortalConfig, session: AuthSession) -> Result<Self, Error> {
        let client = Client::builder().user_agent(&config.user_agent).build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            session,
        })
    }

    #[must_use]
    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Headers for the next request, reflecting the session as of now.
    ///
    /// # Errors
    ///
    /// Returns an error if the held token cannot be used as a header value.
    pub fn headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(PORTAL_TYPE_HEADER, HeaderValue::from_static(PORTAL_TYPE));

        // An empty token counts as no token.
        if let Some(token) = self.session.token().filter(|token| !token.expose().is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    /// Sends `operation` and decodes its `data` into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the endpoint cannot be reached,
    /// [`Error::Operation`] when the server returns a GraphQL error list,
    /// [`Error::Http`] for other non-success statuses, and [`Error::Parse`] or
    /// [`Error::MissingData`] when the body is not a usable GraphQL response.
    pub async fn execute<V, T>(&self, operation: &Operation<V>) -> Result<T, Error>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let headers = self.headers()?;

        let span = info_span!(
            "graphql.execute",
            operation = operation.name,
            http.method = "POST",
            url = %self.endpoint
        );
        let response = self
            .client
            .post(self.endpoint.clone())
            .headers(headers)
            .json(&operation.request())
            .send()
            .instrument(span)
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!(operation = operation.name, status = status.as_u16(), "graphql response");

        decode_response(status, &body)
    }
}

fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T, Error> {
    let parsed: Response = match serde_json::from_slice(body) {
        Ok(parsed) => parsed,
        Err(err) if status.is_success() => return Err(Error::Parse(err)),
        Err(_) => return Err(Error::http(status.as_u16(), &String::from_utf8_lossy(body))),
    };

    if let Some(errors) = parsed.errors.filter(|errors| !errors.is_empty()) {
        return Err(Error::Operation(OperationErrors::new(errors)));
    }

    if !status.is_success() {
        return Err(Error::http(status.as_u16(), &String::from_utf8_lossy(body)));
    }

    match parsed.data {
        None | Some(Value::Null) => Err(Error::MissingData),
        Some(data) => Ok(serde_json::from_value(data)?),
    }
}
