//! Configuration constants.
//!
//! This module defines the configuration constants used throughout the
//! application: the upstream endpoint, timeouts, and output sentinels.

use std::time::Duration;

/// crt.sh query endpoint.
///
/// The domain is passed as the `q` query parameter and `output=json` selects
/// the JSON response format.
pub const CRTSH_BASE_URL: &str = "https://crt.sh/";

/// Upstream fetch timeout.
///
/// crt.sh can take well over a minute to answer queries for domains with
/// large certificate histories, so the bound is generous. There is no retry;
/// a timeout is a fatal fetch error.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(90);

/// DNS query timeout in seconds.
///
/// Most DNS queries complete in <1s; 3s provides a buffer while failing fast
/// on unresponsive servers. A failed lookup degrades to the sentinel value,
/// it never aborts the run.
pub const DNS_TIMEOUT_SECS: u64 = 3;

/// Value reported in place of an IP address for a name that does not resolve.
pub const IP_NOT_FOUND: &str = "IP not found";

/// User-Agent sent with crt.sh queries.
pub const DEFAULT_USER_AGENT: &str = concat!("crtsh_lookup/", env!("CARGO_PKG_VERSION"));
