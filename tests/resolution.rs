//! Tests for the sentinel-on-failure resolver contract.

use crtsh_lookup::config::IP_NOT_FOUND;
use crtsh_lookup::initialization::init_resolver;
use crtsh_lookup::resolve_ip;

#[tokio::test]
async fn test_unresolvable_host_returns_sentinel() {
    let resolver = init_resolver();

    // .invalid is reserved (RFC 2606) and can never resolve; the resolver
    // must degrade to the sentinel instead of returning an error
    let ip = resolve_ip("definitely-not-real.invalid", &resolver).await;
    assert_eq!(ip, IP_NOT_FOUND);
}

#[tokio::test]
async fn test_empty_hostname_returns_sentinel() {
    let resolver = init_resolver();

    let ip = resolve_ip("", &resolver).await;
    assert_eq!(ip, IP_NOT_FOUND);
}
