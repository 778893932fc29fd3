//! Boundary validation of endpoint strings

use regex::Regex;
use std::sync::OnceLock;

static ENDPOINT_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Pattern every endpoint must match before entering a fetch call:
/// scheme, hostname (optionally onion-suffixed), optional port, optional path
fn endpoint_pattern() -> &'static Regex {
    ENDPOINT_PATTERN.get_or_init(|| {
        Regex::new(r"^https?://[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)*(:\d{1,5})?(/[^\s]*)?$")
            .expect("endpoint pattern compiles")
    })
}

/// True iff the endpoint string is acceptable for a fetch call
pub fn is_valid_endpoint(endpoint: &str) -> bool {
    endpoint_pattern().is_match(endpoint)
}

/// The offending values of a batch, empty when the whole batch is valid
pub fn invalid_endpoints(endpoints: &[String]) -> Vec<String> {
    endpoints
        .iter()
        .filter(|e| !is_valid_endpoint(e))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_clear_web_and_onion_forms() {
        assert!(is_valid_endpoint("https://provider.example.com"));
        assert!(is_valid_endpoint("https://provider.example.com:9945"));
        assert!(is_valid_endpoint("http://provider.example.com:9945/trade"));
        assert!(is_valid_endpoint(
            "http://cl5smsdedq6hy5bzheq5zzkqorte5w5tb74gwzh7wnehmr2nzdrmqsyd.onion:9945"
        ));
    }

    #[test]
    fn test_rejects_malformed_values() {
        assert!(!is_valid_endpoint(""));
        assert!(!is_valid_endpoint("provider.example.com"));
        assert!(!is_valid_endpoint("ftp://provider.example.com"));
        assert!(!is_valid_endpoint("https://"));
        assert!(!is_valid_endpoint("https://bad host"));
    }

    #[test]
    fn test_batch_rejection_lists_offenders() {
        let batch = vec![
            "https://ok.example.com".to_string(),
            "not-a-url".to_string(),
            "ftp://nope".to_string(),
        ];
        assert_eq!(invalid_endpoints(&batch), vec!["not-a-url", "ftp://nope"]);
    }
}
