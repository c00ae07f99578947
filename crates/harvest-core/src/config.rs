use serde::{Deserialize, Serialize};

/// Settings for the URL side of the pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// Timeout for the robots.txt lookup, in seconds
    pub robots_timeout_seconds: u32,
    /// Timeout for the page fetch, in seconds
    pub page_timeout_seconds: u32,
    /// User agent to send (rotated browser agents by default)
    pub user_agent: Option<String>,
    /// Profile-network domains that are never scraped directly
    pub profile_domains: Vec<String>,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            robots_timeout_seconds: 5,
            page_timeout_seconds: 15,
            user_agent: None,
            profile_domains: vec!["linkedin.com".to_string()],
        }
    }
}

impl HarvestConfig {
    /// True when `host` is a configured profile domain or one of its subdomains.
    pub fn is_profile_domain(&self, host: &str) -> bool {
        let host = host.to_ascii_lowercase();
        self.profile_domains
            .iter()
            .any(|d| host == *d || host.ends_with(&format!(".{d}")))
    }
}
