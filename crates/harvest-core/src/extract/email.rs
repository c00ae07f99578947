use regex::Regex;

use super::Extractor;
use crate::contact::{ContactKind, ContactRecord};

const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

pub struct EmailExtractor {
    regex: Regex,
}

impl EmailExtractor {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(EMAIL_PATTERN)?,
        })
    }
}

impl Extractor for EmailExtractor {
    fn kind(&self) -> ContactKind {
        ContactKind::Email
    }

    fn extract(&self, text: &str, source: Option<&str>) -> Vec<ContactRecord> {
        self.regex
            .find_iter(text)
            .map(|m| ContactRecord::new(ContactKind::Email, m.as_str(), source))
            .collect()
    }
}
