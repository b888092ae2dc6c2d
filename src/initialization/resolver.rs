//! DNS resolver initialization.

use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::DNS_TIMEOUT_SECS;

/// Initializes the DNS resolver for subdomain lookups.
///
/// Creates a resolver using the default configuration with short timeouts so
/// an unresponsive DNS server cannot stall the sequential lookup loop for
/// long. Lookups happen one name at a time; a failed lookup is reported as a
/// sentinel value rather than an error.
pub fn init_resolver() -> TokioAsyncResolver {
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
    opts.attempts = 2; // Reduce retry attempts to fail faster
                       // Set ndots to 0 to prevent search domain appending
    opts.ndots = 0;

    TokioAsyncResolver::tokio(ResolverConfig::default(), opts)
}
