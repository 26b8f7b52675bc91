//! REST client layer for the admin backend.
//!
//! This module defines the error taxonomy shared by every remote call, the
//! authenticated HTTP wrapper, and one thin module per resource (users, cards).

pub mod cards;
pub mod client;
pub mod models;
pub mod users;

pub use cards::CardsApi;
pub use client::{ApiClient, HttpMethod};
pub use models::{Card, CardOwner, CardPatch, PageMeta, PageResponse, User, UserPatch};
pub use users::UsersApi;

/// Common error types for remote operations.
///
/// Errors are cloneable so they can travel inside UI actions and be kept as
/// the table's last load error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// No response reached the client (connect failure, timeout, broken body).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("Request failed with status {status}: {message}")]
    Http { status: u16, message: String },

    /// A 2xx body did not have the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Client-side input check failed before any request was made.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The token store could not be read.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ApiError {
    /// HTTP status for `Http` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
