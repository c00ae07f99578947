use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

pub const AUTO_EXTRACTED_TAG: &str = "auto-extracted";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Email,
    Phone,
    Social,
}

impl ContactKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Social => "social",
        }
    }
}

impl std::fmt::Display for ContactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single extracted contact.
///
/// Records are built by an extractor (or the profile-network short circuit),
/// filled in at most once by the enricher, then handed to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    #[serde(rename = "type")]
    pub kind: ContactKind,
    pub value: String,
    pub source: Option<String>,
    pub metadata: BTreeMap<String, String>,
    pub tags: Vec<String>,
}

impl ContactRecord {
    #[must_use]
    pub fn new(kind: ContactKind, value: impl Into<String>, source: Option<&str>) -> Self {
        Self {
            kind,
            value: value.into(),
            source: source.map(String::from),
            metadata: BTreeMap::new(),
            tags: vec![AUTO_EXTRACTED_TAG.to_string()],
        }
    }

    #[must_use]
    pub fn with_metadata(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set_metadata_if_absent(key, value);
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.add_tag(tag);
        self
    }

    /// Sets `key` only if it is not already present. Returns whether it was set.
    pub fn set_metadata_if_absent(&mut self, key: &str, value: impl Into<String>) -> bool {
        if self.metadata.contains_key(key) {
            return false;
        }
        self.metadata.insert(key.to_string(), value.into());
        true
    }

    pub fn add_tag(&mut self, tag: &str) {
        if !self.tags.iter().any(|t| t == tag) {
            self.tags.push(tag.to_string());
        }
    }

    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

/// Drops every record whose `(kind, value)` was already seen earlier in the list.
#[must_use]
pub fn dedupe(records: Vec<ContactRecord>) -> Vec<ContactRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert((r.kind, r.value.clone())))
        .collect()
}
