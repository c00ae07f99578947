use thiserror::Error;

use crate::resolve::FetchError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Scraping not allowed by robots.txt")]
    PolicyViolation { url: String },

    #[error("Failed to fetch URL: {}", .0.message())]
    Fetch(#[from] FetchError),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Source is required")]
    EmptySource,

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// HTTP-style status code reported to callers for this failure.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::PolicyViolation { .. } => 403,
            Self::InvalidUrl(_) | Self::EmptySource => 400,
            Self::Fetch(_) | Self::Pattern(_) | Self::Http(_) => 500,
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
