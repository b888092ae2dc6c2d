//! Hostname extraction from certificate records.

use std::collections::BTreeSet;

use crate::fetch::CertificateRecord;

/// Extracts the unique hostnames from a crt.sh record list.
///
/// For each record the `name_value` field is read (records without one
/// contribute nothing), surrounding quote characters are stripped, and empty
/// values or issuer-style entries containing `CN=` are discarded. The result
/// is deduplicated and sorted ascending.
///
/// Pure function with no failure path: malformed records degrade to empty
/// contributions, not errors.
pub fn extract_unique_names(records: &[CertificateRecord]) -> Vec<String> {
    let names: BTreeSet<&str> = records
        .iter()
        .filter_map(|record| record.name_value.as_deref())
        .map(|name| name.trim_matches('"'))
        .filter(|name| !name.is_empty() && !name.contains("CN="))
        .collect();
    names.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name_value: &str) -> CertificateRecord {
        CertificateRecord {
            name_value: Some(name_value.to_string()),
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_deduplicates_and_sorts() {
        let records = vec![
            record("b.example.com"),
            record("a.example.com"),
            record("b.example.com"),
        ];
        let names = extract_unique_names(&records);
        assert_eq!(names, vec!["a.example.com", "b.example.com"]);
    }

    #[test]
    fn test_discards_cn_and_empty_entries() {
        let records = vec![
            record("\"CN=Example\""),
            record("foo.example.com"),
            record("foo.example.com"),
            record(""),
        ];
        let names = extract_unique_names(&records);
        assert_eq!(names, vec!["foo.example.com"]);
    }

    #[test]
    fn test_strips_surrounding_quotes() {
        let records = vec![record("\"quoted.example.com\"")];
        assert_eq!(extract_unique_names(&records), vec!["quoted.example.com"]);
    }

    #[test]
    fn test_missing_name_value_contributes_nothing() {
        let records = vec![
            CertificateRecord {
                name_value: None,
                extra: serde_json::Map::new(),
            },
            record("x.example.com"),
        ];
        assert_eq!(extract_unique_names(&records), vec!["x.example.com"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_unique_names(&[]).is_empty());
    }
}
