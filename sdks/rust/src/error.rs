//! Error types for Hutch SDK

use thiserror::Error;

/// Result type alias for Hutch SDK operations
pub type Result<T> = std::result::Result<T, HutchError>;

/// Hutch SDK error types
#[derive(Error, Debug)]
pub enum HutchError {
    /// Base URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Client configuration can never produce a valid request
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Resource path could not be composed into a URL
    #[error("Invalid resource path: {0}")]
    InvalidPath(String),

    /// Request body could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The HTTP exchange did not complete (connect, TLS, timeout, body read)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("API error: {status} {reason}: {body}")]
    Api {
        status: u16,
        reason: String,
        body: String,
    },

    /// Server answered with a success status but the body did not match the expected shape
    #[error("Decode error: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

/// Coarse classification of a [`HutchError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Request can never succeed without correcting configuration or input
    Construction,
    /// No response was received; may be transient
    Transport,
    /// Server rejected the request
    Http,
    /// Server returned data the client could not understand
    Decode,
}

impl HutchError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidUrl(_)
            | Self::InvalidConfig(_)
            | Self::InvalidPath(_)
            | Self::Serialization(_) => ErrorKind::Construction,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Api { .. } => ErrorKind::Http,
            Self::Decode { .. } => ErrorKind::Decode,
        }
    }

    /// HTTP status code, for [`HutchError::Api`]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body, for errors that carry one
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } | Self::Decode { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Whether the server reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
