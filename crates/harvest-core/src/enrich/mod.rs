mod recognizer;

pub use recognizer::{
    EntityRecognizer, EntitySpan, NullRecognizer, RecognitionError, RecognitionResult,
    RemoteRecognizer,
};

use std::collections::HashMap;
use std::sync::Arc;

use crate::contact::ContactRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityCategory {
    Person,
    Organization,
    Location,
    /// Tracked, but no model label maps here yet.
    Title,
}

impl EntityCategory {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_uppercase().as_str() {
            "PERSON" => Some(Self::Person),
            "ORG" => Some(Self::Organization),
            "GPE" => Some(Self::Location),
            _ => None,
        }
    }

    /// Metadata key filled from this category, if any.
    #[must_use]
    pub const fn metadata_key(&self) -> Option<&'static str> {
        match self {
            Self::Person => Some("name"),
            Self::Organization => Some("company"),
            Self::Location => Some("location"),
            Self::Title => None,
        }
    }
}

/// Entity spans for a single text, grouped by category in order of occurrence.
#[derive(Debug, Clone, Default)]
pub struct EntityBucket {
    spans: HashMap<EntityCategory, Vec<String>>,
}

impl EntityBucket {
    pub fn from_spans(spans: impl IntoIterator<Item = EntitySpan>) -> Self {
        let mut bucket = Self::default();
        for span in spans {
            if let Some(category) = EntityCategory::from_label(&span.label) {
                bucket.spans.entry(category).or_default().push(span.text);
            }
        }
        bucket
    }

    pub fn first(&self, category: EntityCategory) -> Option<&str> {
        self.spans
            .get(&category)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    pub fn all(&self, category: EntityCategory) -> &[String] {
        self.spans.get(&category).map(Vec::as_slice).unwrap_or_default()
    }

}

/// Fills `company`, `name` and `location` on records that lack them.
///
/// Every record in a batch gets the first span of each category found
/// anywhere in the text, not the span nearest to the record.
pub struct EntityEnricher {
    recognizer: Arc<dyn EntityRecognizer>,
}

impl EntityEnricher {
    pub fn new(recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self { recognizer }
    }

    pub async fn enrich(
        &self,
        text: &str,
        mut records: Vec<ContactRecord>,
    ) -> Vec<ContactRecord> {
        let spans = match self.recognizer.recognize(text).await {
            Ok(spans) => spans,
            Err(e) => {
                tracing::warn!(
                    recognizer = self.recognizer.name(),
                    "entity recognition failed: {}",
                    e
                );
                return records;
            }
        };

        let bucket = EntityBucket::from_spans(spans);
        tracing::debug!(
            people = bucket.all(EntityCategory::Person).len(),
            organizations = bucket.all(EntityCategory::Organization).len(),
            locations = bucket.all(EntityCategory::Location).len(),
            "entities recognized"
        );

        apply_bucket(&bucket, &mut records);
        records
    }
}

fn apply_bucket(bucket: &EntityBucket, records: &mut [ContactRecord]) {
    let fills: Vec<(&str, &str)> = [
        EntityCategory::Organization,
        EntityCategory::Person,
        EntityCategory::Location,
    ]
    .into_iter()
    .filter_map(|c| Some((c.metadata_key()?, bucket.first(c)?)))
    .collect();

    for record in records.iter_mut() {
        for (key, value) in &fills {
            record.set_metadata_if_absent(key, *value);
        }
    }
}
