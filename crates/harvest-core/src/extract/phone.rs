use regex::Regex;

use super::Extractor;
use crate::contact::{ContactKind, ContactRecord};

// Country code, then area code in parentheses or bare, then 3 and 4 digits.
const PHONE_PATTERN: &str = concat!(
    r"(?:\+\d{1,3}[-.\s]?(?:\(\d{3}\)|\d{3})|\(\d{3}\)|\b\d{3})",
    r"[-.\s]?\d{3}[-.\s]?\d{4}\b",
);

pub struct PhoneExtractor {
    regex: Regex,
}

impl PhoneExtractor {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(PHONE_PATTERN)?,
        })
    }
}

impl Extractor for PhoneExtractor {
    fn kind(&self) -> ContactKind {
        ContactKind::Phone
    }

    fn extract(&self, text: &str, source: Option<&str>) -> Vec<ContactRecord> {
        self.regex
            .find_iter(text)
            .map(|m| ContactRecord::new(ContactKind::Phone, m.as_str(), source))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(text: &str) -> Vec<String> {
        PhoneExtractor::new()
            .unwrap()
            .extract(text, None)
            .into_iter()
            .map(|r| r.value)
            .collect()
    }

    #[test]
    fn test_common_formats() {
        assert_eq!(values("Call 555-123-4567 now"), vec!["555-123-4567"]);
        assert_eq!(values("555.123.4567"), vec!["555.123.4567"]);
        assert_eq!(values("555 123 4567"), vec!["555 123 4567"]);
        assert_eq!(values("5551234567"), vec!["5551234567"]);
    }

    #[test]
    fn test_parenthesized_area_code() {
        assert_eq!(values("Office: (555) 123-4567"), vec!["(555) 123-4567"]);
    }

    #[test]
    fn test_country_code() {
        assert_eq!(values("Intl +1 555.123.4567"), vec!["+1 555.123.4567"]);
        assert_eq!(values("+44-555-123-4567"), vec!["+44-555-123-4567"]);
        assert_eq!(values("+1 (555) 123-4567"), vec!["+1 (555) 123-4567"]);
        assert_eq!(values("+15551234567"), vec!["+15551234567"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        assert_eq!(
            values("555-123-4567 or 555-123-4567"),
            vec!["555-123-4567", "555-123-4567"]
        );
    }

    #[test]
    fn test_rejects_short_and_embedded_numbers() {
        assert!(values("123-4567").is_empty());
        assert!(values("order 123456789012345").is_empty());
        assert!(values("2024-01-15").is_empty());
    }
}
