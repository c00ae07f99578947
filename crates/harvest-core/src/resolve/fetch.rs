use std::time::Duration;

use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, UPGRADE_INSECURE_REQUESTS, USER_AGENT,
};
use reqwest::{Client, RequestBuilder, StatusCode};
use thiserror::Error;
use url::Url;

use crate::config::HarvestConfig;

/// Human-readable category of a failed page fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFailureKind {
    Connection,
    Forbidden,
    NotFound,
    RateLimited,
    UpstreamServer,
    Generic,
}

impl FetchFailureKind {
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        match status {
            403 => Self::Forbidden,
            404 => Self::NotFound,
            429 => Self::RateLimited,
            500..=599 => Self::UpstreamServer,
            _ => Self::Generic,
        }
    }

    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Connection => "Could not connect to the website",
            Self::Forbidden => "Access forbidden: the website blocked the request",
            Self::NotFound => "Page not found",
            Self::RateLimited => "Too many requests: the website is rate limiting access",
            Self::UpstreamServer => "The website returned a server error",
            Self::Generic => "Request failed",
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP status {0}")]
    Status(u16),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Other(String),
}

impl FetchError {
    #[must_use]
    pub fn kind(&self) -> FetchFailureKind {
        match self {
            Self::Status(code) => FetchFailureKind::from_status(*code),
            Self::Http(e) => {
                if let Some(status) = e.status() {
                    FetchFailureKind::from_status(status.as_u16())
                } else if e.is_connect() || e.is_timeout() {
                    FetchFailureKind::Connection
                } else {
                    FetchFailureKind::Generic
                }
            }
            Self::Other(_) => FetchFailureKind::Generic,
        }
    }

    /// Category message, or the raw error text when no category applies.
    #[must_use]
    pub fn message(&self) -> String {
        match self.kind() {
            FetchFailureKind::Generic => self.to_string(),
            kind => kind.message().to_string(),
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;

/// Network access for the resolver.
#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    /// Body of a robots.txt document, whatever the response status.
    async fn fetch_robots(&self, url: &Url) -> FetchResult<String>;

    /// Body of a page; non-2xx responses are errors.
    async fn fetch_page(&self, url: &Url) -> FetchResult<String>;
}

/// reqwest-backed fetcher that presents itself as a desktop browser.
///
/// Unless a fixed agent is configured, every request draws a fresh
/// User-Agent from the browser pool.
pub struct HttpFetcher {
    client: Client,
    user_agent: Option<String>,
    robots_timeout: Duration,
    page_timeout: Duration,
}

impl HttpFetcher {
    pub fn new(config: &HarvestConfig) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
        headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));

        let client = Client::builder()
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self {
            client,
            user_agent: config.user_agent.clone(),
            robots_timeout: Duration::from_secs(u64::from(config.robots_timeout_seconds)),
            page_timeout: Duration::from_secs(u64::from(config.page_timeout_seconds)),
        })
    }

    fn user_agent(&self) -> String {
        self.user_agent.clone().unwrap_or_else(random_user_agent)
    }

    fn get(&self, url: &Url, timeout: Duration) -> RequestBuilder {
        self.client
            .get(url.as_str())
            .header(USER_AGENT, self.user_agent())
            .timeout(timeout)
    }
}

#[async_trait::async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_robots(&self, url: &Url) -> FetchResult<String> {
        let response = self.get(url, self.robots_timeout).send().await?;

        Ok(response.text().await?)
    }

    async fn fetch_page(&self, url: &Url) -> FetchResult<String> {
        let response = self.get(url, self.page_timeout).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

impl From<StatusCode> for FetchError {
    fn from(status: StatusCode) -> Self {
        Self::Status(status.as_u16())
    }
}

fn random_user_agent() -> String {
    use rand::Rng;

    let agents = [
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
        "Mozilla/5.0 (Windows NT 10.0; rv:128.0) Gecko/20100101 Firefox/128.0",
        "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0",
    ];

    let mut rng = rand::rng();
    agents[rng.random_range(0..agents.len())].to_string()
}
