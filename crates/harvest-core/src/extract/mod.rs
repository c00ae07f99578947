mod email;
mod phone;
mod social;

pub use email::EmailExtractor;
pub use phone::PhoneExtractor;
pub use social::{Platform, SocialExtractor};

use crate::contact::{ContactKind, ContactRecord};

/// A pure matcher from text to candidate records.
pub trait Extractor: Send + Sync {
    fn kind(&self) -> ContactKind;

    fn extract(&self, text: &str, source: Option<&str>) -> Vec<ContactRecord>;
}

/// Runs its extractors in registration order and concatenates their output.
pub struct CompositeExtractor {
    extractors: Vec<Box<dyn Extractor>>,
}

impl CompositeExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// Email, then phone, then social.
    pub fn with_default_extractors() -> Result<Self, regex::Error> {
        Ok(Self::new()
            .with_extractor(Box::new(EmailExtractor::new()?))
            .with_extractor(Box::new(PhoneExtractor::new()?))
            .with_extractor(Box::new(SocialExtractor::new()?)))
    }

    #[must_use]
    pub fn with_extractor(mut self, extractor: Box<dyn Extractor>) -> Self {
        self.extractors.push(extractor);
        self
    }

    pub fn extract(&self, text: &str, source: Option<&str>) -> Vec<ContactRecord> {
        let mut combined = Vec::new();

        for extractor in &self.extractors {
            let found = extractor.extract(text, source);
            tracing::debug!(kind = %extractor.kind(), count = found.len(), "pattern matches");
            combined.extend(found);
        }

        combined
    }
}

impl Default for CompositeExtractor {
    fn default() -> Self {
        Self::new()
    }
}
