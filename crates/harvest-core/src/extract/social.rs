use regex::Regex;
use serde::{Deserialize, Serialize};

use super::Extractor;
use crate::contact::{ContactKind, ContactRecord};

const URL_PREFIX: &str = r"(?:https?://)?(?:www\.)?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Linkedin,
    Twitter,
    Facebook,
    Instagram,
}

impl Platform {
    /// Table order; this is also the order social records are emitted in.
    pub const ALL: [Self; 4] = [Self::Linkedin, Self::Twitter, Self::Facebook, Self::Instagram];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Linkedin => "linkedin",
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
        }
    }

    const fn profile_pattern(self) -> &'static str {
        match self {
            Self::Linkedin => r"linkedin\.com/(?:in|company)/[A-Za-z0-9_-]+",
            Self::Twitter => r"twitter\.com/[A-Za-z0-9_]+",
            Self::Facebook => r"facebook\.com/[A-Za-z0-9.]+",
            Self::Instagram => r"instagram\.com/[A-Za-z0-9_.]+",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prefixes `https://` unless the match already carries a scheme.
#[must_use]
pub fn normalize_profile_url(matched: &str) -> String {
    if matched.starts_with("http") {
        matched.to_string()
    } else {
        format!("https://{matched}")
    }
}

pub struct SocialExtractor {
    patterns: Vec<(Platform, Regex)>,
}

impl SocialExtractor {
    pub fn new() -> Result<Self, regex::Error> {
        let patterns = Platform::ALL
            .iter()
            .map(|p| Ok((*p, Regex::new(&format!("{URL_PREFIX}{}", p.profile_pattern()))?)))
            .collect::<Result<Vec<_>, regex::Error>>()?;

        Ok(Self { patterns })
    }
}

impl Extractor for SocialExtractor {
    fn kind(&self) -> ContactKind {
        ContactKind::Social
    }

    fn extract(&self, text: &str, source: Option<&str>) -> Vec<ContactRecord> {
        let mut records = Vec::new();

        for (platform, regex) in &self.patterns {
            for m in regex.find_iter(text) {
                let value = normalize_profile_url(m.as_str());
                let record = ContactRecord::new(ContactKind::Social, value, source)
                    .with_metadata("platform", platform.as_str())
                    .with_tag(platform.as_str());
                records.push(record);
            }
        }

        records
    }
}
