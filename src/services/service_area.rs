use crate::config::ServiceAreaConfig;

/// Permissive keyword check: the address is in-area iff it mentions any
/// configured place name, case-insensitively. Not geocoding; false
/// positives and negatives are an accepted tradeoff.
pub fn is_within_service_area(address: &str, area: &ServiceAreaConfig) -> bool {
    let normalized = address.trim().to_lowercase();
    if normalized.is_empty() {
        return false;
    }
    area.keywords.iter().any(|k| normalized.contains(k))
}

pub fn out_of_area_message(area: &ServiceAreaConfig) -> String {
    format!(
        "Sorry, we currently only serve {}. Please contact us directly for locations outside this area.",
        area.label
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> ServiceAreaConfig {
        ServiceAreaConfig {
            keywords: vec!["minglanilla".to_string(), "cebu".to_string(), "talisay".to_string()],
            label: "Minglanilla and nearby Cebu areas".to_string(),
        }
    }

    #[test]
    fn test_keyword_match() {
        assert!(is_within_service_area("123 Main St, Minglanilla, Cebu", &area()));
        assert!(is_within_service_area("Talisay City", &area()));
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert!(is_within_service_area("  MINGLANILLA!  ", &area()));
        assert!(is_within_service_area("brgy. Tubod, CeBu", &area()));
    }

    #[test]
    fn test_outside_area() {
        assert!(!is_within_service_area("BGC, Taguig, Metro Manila", &area()));
        assert!(!is_within_service_area("", &area()));
        assert!(!is_within_service_area("   ", &area()));
    }

    #[test]
    fn test_out_of_area_message_names_label() {
        assert!(out_of_area_message(&area()).contains("Minglanilla and nearby Cebu areas"));
    }
}
