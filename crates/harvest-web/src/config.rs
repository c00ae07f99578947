use std::str::FromStr;

use harvest_core::HarvestConfig;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 5001;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,
    /// NER model endpoint; without one, records are not enriched
    pub ner_url: Option<String>,
    /// Timeout for a single NER call, in seconds
    pub ner_timeout_seconds: u64,
    #[serde(default)]
    pub harvest: HarvestConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            ner_url: None,
            ner_timeout_seconds: 30,
            harvest: HarvestConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let harvest = HarvestConfig {
            robots_timeout_seconds: parse_or(
                lookup("HARVEST_ROBOTS_TIMEOUT_SECS"),
                defaults.harvest.robots_timeout_seconds,
            ),
            page_timeout_seconds: parse_or(
                lookup("HARVEST_PAGE_TIMEOUT_SECS"),
                defaults.harvest.page_timeout_seconds,
            ),
            user_agent: lookup("HARVEST_USER_AGENT").filter(|v| !v.is_empty()),
            ..defaults.harvest
        };

        Self {
            port: parse_or(lookup("PORT"), defaults.port),
            ner_url: lookup("HARVEST_NER_URL").filter(|v| !v.is_empty()),
            ner_timeout_seconds: parse_or(
                lookup("HARVEST_NER_TIMEOUT_SECS"),
                defaults.ner_timeout_seconds,
            ),
            harvest,
        }
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServerConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);

        assert_eq!(config.port, 5001);
        assert!(config.ner_url.is_none());
        assert_eq!(config.harvest.robots_timeout_seconds, 5);
        assert_eq!(config.harvest.page_timeout_seconds, 15);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("HARVEST_NER_URL", "http://ner:5002/recognize"),
            ("HARVEST_PAGE_TIMEOUT_SECS", "30"),
            ("HARVEST_USER_AGENT", "Bot/2.0"),
        ]);

        assert_eq!(config.port, 8080);
        assert_eq!(config.ner_url.as_deref(), Some("http://ner:5002/recognize"));
        assert_eq!(config.harvest.page_timeout_seconds, 30);
        assert_eq!(config.harvest.user_agent.as_deref(), Some("Bot/2.0"));
        assert_eq!(config.harvest.profile_domains, vec!["linkedin.com"]);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = config_from(&[("PORT", "not-a-port"), ("HARVEST_NER_URL", "")]);

        assert_eq!(config.port, 5001);
        assert!(config.ner_url.is_none());
    }
}
