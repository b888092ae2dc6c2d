//! IP address resolution.

use hickory_resolver::TokioAsyncResolver;

use crate::config::IP_NOT_FOUND;

/// Resolves a hostname to an IP address using DNS.
///
/// Performs a single forward lookup and returns the first address found.
/// Resolution failures are expected for names harvested from certificate
/// transparency logs, so any failure (including an empty answer) is collapsed
/// into the [`IP_NOT_FOUND`] sentinel rather than an error. The batch is
/// never aborted by one unresolvable name.
pub async fn resolve_ip(host: &str, resolver: &TokioAsyncResolver) -> String {
    match resolver.lookup_ip(host).await {
        Ok(response) => match response.iter().next() {
            Some(ip) => ip.to_string(),
            None => {
                log::debug!("DNS answer for {host} contained no addresses");
                IP_NOT_FOUND.to_string()
            }
        },
        Err(e) => {
            log::debug!("Failed to resolve {host}: {e}");
            IP_NOT_FOUND.to_string()
        }
    }
}
