//! Error types for Supatask
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Supatask operations
///
/// This enum encompasses all possible errors that can occur during
/// configuration loading, authentication, and calls against the backend's
/// auth and REST endpoints.
#[derive(Error, Debug)]
pub enum SupataskError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Authentication errors (missing credentials, unusable session)
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// The backend answered with a non-success status code.
    ///
    /// The status and the raw response body are preserved so callers can
    /// decide what to do with, say, a 404 on delete versus a 401.
    #[error("Unexpected HTTP status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code returned by the backend
        status: u16,
        /// Raw response body, often a PostgREST error document
        body: String,
    },

    /// HTTP transport errors (connection refused, DNS, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Supatask operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
