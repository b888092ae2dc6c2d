//! DNS resolution for discovered subdomains.

mod resolution;

pub use resolution::resolve_ip;
