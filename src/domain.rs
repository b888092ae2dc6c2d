//! Subdomain filtering.

/// Keeps the hostnames that fall under `domain`.
///
/// Containment is a plain substring check: a hostname is kept when it
/// contains the domain string anywhere and is not exactly equal to it. No
/// label-boundary or case normalization is applied, so `example.com` also
/// matches names like `notexample.com`. Input order is preserved, and the
/// filter is idempotent.
pub fn filter_subdomains(names: &[String], domain: &str) -> Vec<String> {
    names
        .iter()
        .filter(|name| name.contains(domain) && name.as_str() != domain)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_keeps_subdomains_only() {
        let input = names(&["example.com", "sub.example.com", "other.org"]);
        assert_eq!(
            filter_subdomains(&input, "example.com"),
            vec!["sub.example.com"]
        );
    }

    #[test]
    fn test_preserves_input_order() {
        let input = names(&["a.example.com", "b.example.com", "c.example.com"]);
        assert_eq!(
            filter_subdomains(&input, "example.com"),
            vec!["a.example.com", "b.example.com", "c.example.com"]
        );
    }

    #[test]
    fn test_idempotent() {
        let input = names(&["example.com", "sub.example.com", "deep.sub.example.com"]);
        let once = filter_subdomains(&input, "example.com");
        let twice = filter_subdomains(&once, "example.com");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_substring_semantics_are_not_label_aware() {
        // Known quirk: containment is substring-based, not label-based
        let input = names(&["notexample.com", "example.community"]);
        assert_eq!(
            filter_subdomains(&input, "example.com"),
            vec!["notexample.com", "example.community"]
        );
    }

    #[test]
    fn test_empty_inputs() {
        assert!(filter_subdomains(&[], "example.com").is_empty());
        let input = names(&["example.com"]);
        assert!(filter_subdomains(&input, "example.com").is_empty());
    }
}
