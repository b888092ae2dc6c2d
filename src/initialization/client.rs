//! HTTP client initialization.

use reqwest::ClientBuilder;

use crate::config::{DEFAULT_USER_AGENT, FETCH_TIMEOUT};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for the crt.sh query.
///
/// Creates a `reqwest::Client` configured with:
/// - A generous timeout (crt.sh can be slow for large domains)
/// - A descriptive User-Agent header
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client() -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(FETCH_TIMEOUT)
        .user_agent(DEFAULT_USER_AGENT)
        .build()?;
    Ok(client)
}
