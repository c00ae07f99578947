//! Profile networks that cannot be scraped directly.
//!
//! Requests for these hosts never reach the page fetcher. A recognized
//! profile route produces a ready-made social record; anything else gets a
//! placeholder text that still runs through the extractors.

use url::Url;

use crate::contact::{ContactKind, ContactRecord};
use crate::extract::Platform;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileRoute {
    Personal(String),
    Company(String),
    Other,
}

impl ProfileRoute {
    pub fn from_url(url: &Url) -> Self {
        let mut segments = url
            .path_segments()
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty());

        match (segments.next(), segments.next()) {
            (Some("in"), Some(id)) => Self::Personal(id.to_string()),
            (Some("company"), Some(id)) => Self::Company(id.to_string()),
            _ => Self::Other,
        }
    }
}

/// Placeholder text plus the short-circuit record, if the route has one.
pub fn synthesize(route: &ProfileRoute, url: &str) -> (String, Option<ContactRecord>) {
    let base = || {
        ContactRecord::new(ContactKind::Social, url, Some(url))
            .with_metadata("platform", Platform::Linkedin.as_str())
            .with_tag(Platform::Linkedin.as_str())
    };

    match route {
        ProfileRoute::Personal(id) => (
            format!("LinkedIn profile: {id}"),
            Some(
                base()
                    .with_metadata("profile_id", id.as_str())
                    .with_metadata("profile_type", "personal"),
            ),
        ),
        ProfileRoute::Company(id) => (
            format!("LinkedIn company page: {id}"),
            Some(
                base()
                    .with_metadata("company_id", id.as_str())
                    .with_metadata("profile_type", "company"),
            ),
        ),
        ProfileRoute::Other => (format!("LinkedIn page: {url}"), None),
    }
}
