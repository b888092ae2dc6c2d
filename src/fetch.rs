//! Fetching certificate records from crt.sh.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::CRTSH_BASE_URL;
use crate::error_handling::FetchError;

/// One certificate record as returned by crt.sh.
///
/// Only `name_value` is read by the pipeline. Every other field is carried in
/// `extra` untouched, so rendering or saving the raw response mirrors exactly
/// what the upstream service sent. crt.sh joins multiple SAN entries into a
/// single newline-separated `name_value`; issuer-style entries carry a `CN=`
/// marker and are discarded later by the name extractor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateRecord {
    /// Hostname payload of the record; missing in some records and tolerated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_value: Option<String>,

    /// All other upstream fields, passed through unmodified.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Queries crt.sh for the certificate records of `domain`.
///
/// Issues a single GET to `https://crt.sh/?q=<domain>&output=json`. There is
/// no retry: a network failure, a non-2xx status, or a malformed JSON body is
/// returned as a [`FetchError`] and terminates the run.
///
/// # Errors
///
/// - [`FetchError::Request`] if the request cannot be completed
/// - [`FetchError::Status`] if crt.sh answers with a non-success status
/// - [`FetchError::Decode`] if the body is not a JSON record list
pub async fn fetch_certificates(
    client: &reqwest::Client,
    domain: &str,
) -> Result<Vec<CertificateRecord>, FetchError> {
    let response = client
        .get(CRTSH_BASE_URL)
        .query(&[("q", domain), ("output", "json")])
        .send()
        .await
        .map_err(FetchError::Request)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status { status });
    }

    response
        .json::<Vec<CertificateRecord>>()
        .await
        .map_err(FetchError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_preserves_unknown_fields() {
        let raw = r#"{"issuer_ca_id":12345,"name_value":"foo.example.com","not_before":"2024-01-01T00:00:00"}"#;
        let record: CertificateRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.name_value.as_deref(), Some("foo.example.com"));
        assert_eq!(record.extra["issuer_ca_id"], serde_json::json!(12345));

        let round_trip: Value = serde_json::to_value(&record).unwrap();
        assert_eq!(round_trip["issuer_ca_id"], serde_json::json!(12345));
        assert_eq!(round_trip["not_before"], serde_json::json!("2024-01-01T00:00:00"));
    }

    #[test]
    fn test_record_tolerates_missing_name_value() {
        let record: CertificateRecord = serde_json::from_str(r#"{"id":7}"#).unwrap();
        assert!(record.name_value.is_none());

        // A missing field must not reappear when serializing the raw record
        let round_trip = serde_json::to_string(&record).unwrap();
        assert!(!round_trip.contains("name_value"));
    }
}
