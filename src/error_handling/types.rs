//! Error type definitions.
//!
//! This module defines the typed errors used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for the crt.sh fetch.
///
/// All three variants are fatal: the orchestrator reports the failure and the
/// process exits non-zero, with no retry and no partial result.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be completed (connect failure, timeout, etc.).
    #[error("crt.sh request failed: {0}")]
    Request(#[source] ReqwestError),

    /// crt.sh answered with a non-success status code.
    #[error("crt.sh returned HTTP {status}")]
    Status {
        /// The status code received from the upstream service.
        status: StatusCode,
    },

    /// The response body was not the expected JSON record list.
    #[error("crt.sh returned a malformed JSON body: {0}")]
    Decode(#[source] ReqwestError),
}
