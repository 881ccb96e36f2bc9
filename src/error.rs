//! Errors returned by the service clients

use std::error::Error as StdError;

use thiserror::Error;

/// Everything that can go wrong talking to a service
///
/// Checks match on this to pick a status: `NotFound` is meaningful for
/// lookups, everything else ends up CRITICAL with its text in the message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// The service could not be reached at all
    #[error("{0}")]
    Transport(String),
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("{0}")]
    Catalog(String),
    #[error("invalid client configuration: {0}")]
    Config(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("HTTP {status}: {body}")]
    Api { status: u16, body: String },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("unsupported API version {0:?}")]
    UnsupportedVersion(String),
}

impl ClientError {
    pub fn is_transport(&self) -> bool {
        matches!(*self, ClientError::Transport(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(*self, ClientError::NotFound(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(with_sources(&e))
        } else if e.is_builder() {
            ClientError::Config(with_sources(&e))
        } else {
            ClientError::Transport(with_sources(&e))
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}

impl From<url::ParseError> for ClientError {
    fn from(e: url::ParseError) -> Self {
        ClientError::Config(format!("bad url: {}", e))
    }
}

/// reqwest hides the interesting part ("connection refused") in the source
/// chain, so flatten it into the message
fn with_sources(e: &dyn StdError) -> String {
    let mut out = e.to_string();
    let mut source = e.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if !out.contains(&text) {
            out.push_str(": ");
            out.push_str(&text);
        }
        source = inner.source();
    }
    out
}
