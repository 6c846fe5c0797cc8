//! GraphQL-over-HTTP payloads: `{ query, variables }` in, `{ data, errors }` out.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A query or mutation document bound to its variables.
#[derive(Clone, Debug)]
pub struct Operation<V> {
    pub name: &'static str,
    pub document: &'static str,
    pub variables: V,
}

impl<V: Serialize> Operation<V> {
    pub(crate) fn request(&self) -> Request<'_, V> {
        Request {
            query: self.document,
            operation_name: self.name,
            variables: &self.variables,
        }
    }
}

/// Variables for operations that take none; serializes as `{}`.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct NoVariables {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Request<'a, V> {
    pub query: &'a str,
    pub operation_name: &'a str,
    pub variables: &'a V,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Response {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQLError>>,
}

/// One entry of a GraphQL `errors` list.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GraphQLError {
    pub message: String,
    #[serde(default)]
    pub path: Option<Vec<Value>>,
    #[serde(default)]
    pub extensions: Option<Value>,
}

impl GraphQLError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
            extensions: None,
        }
    }
}

/// Non-empty error list returned by the server for an operation.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationErrors(Vec<GraphQLError>);

impl OperationErrors {
    #[must_use]
    pub fn new(errors: Vec<GraphQLError>) -> Self {
        Self(errors)
    }

    #[must_use]
    pub fn errors(&self) -> &[GraphQLError] {
        &self.0
    }

    /// Message of the first error, which is what the portal shows to students.
    #[must_use]
    pub fn first_message(&self) -> &str {
        self.0
            .first()
            .map_or("Request failed.", |error| error.message.as_str())
    }
}

impl fmt::Display for OperationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.first_message())
    }
}
