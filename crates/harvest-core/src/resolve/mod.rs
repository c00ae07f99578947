mod fetch;
mod html;
mod profile;
mod robots;

pub use fetch::{FetchError, FetchFailureKind, FetchResult, HttpFetcher, PageFetcher};
pub use html::{collapse_whitespace, html_to_text};
pub use profile::ProfileRoute;
pub use robots::{is_path_allowed, robots_url};

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::HarvestConfig;
use crate::contact::ContactRecord;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    #[default]
    Text,
    Url,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    pub source: String,
    pub kind: SourceKind,
}

impl SourceDescriptor {
    pub fn text(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            kind: SourceKind::Text,
        }
    }

    pub fn url(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            kind: SourceKind::Url,
        }
    }
}

/// Text to run the extractors over, or records that replace extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub plain_text: String,
    pub source_id: Option<String>,
    pub short_circuit: Option<Vec<ContactRecord>>,
}

pub struct SourceResolver {
    fetcher: Arc<dyn PageFetcher>,
    config: HarvestConfig,
}

impl SourceResolver {
    pub fn new(fetcher: Arc<dyn PageFetcher>, config: HarvestConfig) -> Self {
        Self { fetcher, config }
    }

    pub async fn resolve(&self, descriptor: &SourceDescriptor) -> Result<Resolution> {
        match descriptor.kind {
            SourceKind::Text => Ok(Resolution {
                plain_text: descriptor.source.clone(),
                source_id: None,
                short_circuit: None,
            }),
            SourceKind::Url => self.resolve_url(descriptor.source.trim()).await,
        }
    }

    async fn resolve_url(&self, raw: &str) -> Result<Resolution> {
        let url = parse_page_url(raw)?;

        if !self.robots_allows(&url).await {
            tracing::info!(url = %url, "refusing fetch disallowed by robots.txt");
            return Err(Error::PolicyViolation {
                url: raw.to_string(),
            });
        }

        let host = url.host_str().unwrap_or_default();
        if self.config.is_profile_domain(host) {
            let route = ProfileRoute::from_url(&url);
            tracing::debug!(url = %url, ?route, "profile network short circuit");

            let (plain_text, record) = profile::synthesize(&route, raw);
            return Ok(Resolution {
                plain_text,
                source_id: Some(raw.to_string()),
                short_circuit: record.map(|r| vec![r]),
            });
        }

        let html = self
            .fetcher
            .fetch_page(&url)
            .await
            .inspect_err(|e| tracing::error!(url = %url, "error fetching URL: {}", e))?;

        let plain_text = html_to_text(&html);
        tracing::debug!(url = %url, chars = plain_text.len(), "page fetched");

        Ok(Resolution {
            plain_text,
            source_id: Some(raw.to_string()),
            short_circuit: None,
        })
    }

    /// Fails open: any problem reading robots.txt counts as allowed.
    async fn robots_allows(&self, url: &Url) -> bool {
        let robots = match robots_url(url) {
            Ok(u) => u,
            Err(e) => {
                tracing::warn!(url = %url, "cannot derive robots.txt location: {}", e);
                return true;
            }
        };

        match self.fetcher.fetch_robots(&robots).await {
            Ok(body) => is_path_allowed(&body, url.path()),
            Err(e) => {
                tracing::warn!(robots = %robots, "robots.txt unavailable, allowing: {}", e);
                true
            }
        }
    }
}

fn parse_page_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::InvalidUrl(format!("unsupported scheme: {}", url.scheme())));
    }
    if url.host_str().unwrap_or_default().is_empty() {
        return Err(Error::InvalidUrl("No host in URL".to_string()));
    }

    Ok(url)
}


#[cfg(test)]
mod tests {
    use super::testing::FakeFetcher;
    use super::*;
    use crate::contact::ContactKind;

    const ROBOTS: &str = "User-agent: *\nDisallow: /\nDisallow: /private\n";

    fn resolver(fetcher: FakeFetcher) -> (Arc<FakeFetcher>, SourceResolver) {
        let fetcher = Arc::new(fetcher);
        let resolver = SourceResolver::new(fetcher.clone(), HarvestConfig::default());
        (fetcher, resolver)
    }

    #[tokio::test]
    async fn test_text_is_returned_unchanged() {
        let (fetcher, resolver) = resolver(FakeFetcher::default());

        let resolution = resolver
            .resolve(&SourceDescriptor::text("  raw a@b.com  "))
            .await
            .unwrap();

        assert_eq!(resolution.plain_text, "  raw a@b.com  ");
        assert!(resolution.source_id.is_none());
        assert!(resolution.short_circuit.is_none());
        assert!(fetcher.robots_calls().is_empty());
        assert!(fetcher.page_calls().is_empty());
    }

    #[tokio::test]
    async fn test_disallowed_path_never_fetches_content() {
        let (fetcher, resolver) = resolver(
            FakeFetcher::default().with_robots("https://example.com/robots.txt", ROBOTS),
        );

        let err = resolver
            .resolve(&SourceDescriptor::url("https://example.com/private"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::PolicyViolation { .. }));
        assert_eq!(err.status_code(), 403);
        assert_eq!(fetcher.robots_calls(), vec!["https://example.com/robots.txt"]);
        assert!(fetcher.page_calls().is_empty());
    }

    #[tokio::test]
    async fn test_allowed_path_is_fetched_and_flattened() {
        let (fetcher, resolver) = resolver(
            FakeFetcher::default()
                .with_robots("https://example.com/robots.txt", ROBOTS)
                .with_page(
                    "https://example.com/public",
                    "<body><script>x()</script><p>Mail  a@example.com</p></body>",
                ),
        );

        let resolution = resolver
            .resolve(&SourceDescriptor::url("https://example.com/public"))
            .await
            .unwrap();

        assert_eq!(resolution.plain_text, "Mail a@example.com");
        assert_eq!(resolution.source_id.as_deref(), Some("https://example.com/public"));
        assert_eq!(fetcher.page_calls(), vec!["https://example.com/public"]);
    }

    #[tokio::test]
    async fn test_missing_robots_fails_open() {
        let (fetcher, resolver) = resolver(
            FakeFetcher::default().with_page("https://example.com/private", "<p>hi</p>"),
        );

        let resolution = resolver
            .resolve(&SourceDescriptor::url("https://example.com/private"))
            .await
            .unwrap();

        assert_eq!(resolution.plain_text, "hi");
        assert_eq!(fetcher.page_calls().len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_classified() {
        let mut fetcher = FakeFetcher::default();
        fetcher.page_status = Some(429);
        let (_, resolver) = resolver(fetcher);

        let err = resolver
            .resolve(&SourceDescriptor::url("https://example.com/"))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 500);
        let Error::Fetch(fetch) = &err else {
            panic!("expected fetch error, got {err:?}");
        };
        assert_eq!(fetch.kind(), FetchFailureKind::RateLimited);
    }

    #[tokio::test]
    async fn test_profile_network_short_circuits() {
        let (fetcher, resolver) = resolver(FakeFetcher::default());

        let resolution = resolver
            .resolve(&SourceDescriptor::url("https://www.linkedin.com/in/jdoe"))
            .await
            .unwrap();

        let records = resolution.short_circuit.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, ContactKind::Social);
        assert_eq!(records[0].metadata_value("profile_id"), Some("jdoe"));
        assert_eq!(
            resolution.source_id.as_deref(),
            Some("https://www.linkedin.com/in/jdoe")
        );
        assert_eq!(fetcher.robots_calls().len(), 1);
        assert!(fetcher.page_calls().is_empty());
    }

    #[tokio::test]
    async fn test_profile_network_other_route_gets_placeholder() {
        let (fetcher, resolver) = resolver(FakeFetcher::default());

        let resolution = resolver
            .resolve(&SourceDescriptor::url("https://linkedin.com/feed/"))
            .await
            .unwrap();

        assert_eq!(resolution.plain_text, "LinkedIn page: https://linkedin.com/feed/");
        assert!(resolution.short_circuit.is_none());
        assert!(fetcher.page_calls().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_urls() {
        let (fetcher, resolver) = resolver(FakeFetcher::default());

        for raw in ["not a url", "ftp://example.com/file", "mailto:a@b.com"] {
            let err = resolver.resolve(&SourceDescriptor::url(raw)).await.unwrap_err();
            assert!(matches!(err, Error::InvalidUrl(_)), "{raw}: {err:?}");
        }
        assert!(fetcher.robots_calls().is_empty());
    }
}
