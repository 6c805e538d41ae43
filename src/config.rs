use std::time::Duration;

use anyhow::Context as _;

pub const API_ENDPOINT: &str = "https://api.syosetu.com/novelapi/api/";
pub const R18_API_ENDPOINT: &str = "https://api.syosetu.com/novel18api/api/";
pub const CONTENT_BASE: &str = "https://ncode.syosetu.com";
pub const R18_CONTENT_BASE: &str = "https://novel18.syosetu.com";
pub const COOKIE_DOMAIN: &str = "syosetu.com";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub fn default_user_agent() -> String {
    format!("narrow/{}", env!("CARGO_PKG_VERSION"))
}

/// Search API endpoints for the two catalogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    pub general: String,
    pub restricted: String,
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self {
            general: API_ENDPOINT.to_owned(),
            restricted: R18_API_ENDPOINT.to_owned(),
        }
    }
}

/// Base URLs of the content sites, plus the domain the age-verification cookie
/// is scoped to. `cookie_domain: None` issues a host-only cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentHosts {
    pub general: String,
    pub restricted: String,
    pub cookie_domain: Option<String>,
}

impl Default for ContentHosts {
    fn default() -> Self {
        Self {
            general: CONTENT_BASE.to_owned(),
            restricted: R18_CONTENT_BASE.to_owned(),
            cookie_domain: Some(COOKIE_DOMAIN.to_owned()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub user_agent: String,
    pub timeout: Duration,
    pub api: ApiEndpoints,
    pub content: ContentHosts,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            api: ApiEndpoints::default(),
            content: ContentHosts::default(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };
        let mut config = Self::default();

        if let Some(user_agent) = value("NARROW_USER_AGENT") {
            config.user_agent = user_agent;
        }
        if let Some(raw) = value("NARROW_TIMEOUT_SECS") {
            let secs = raw
                .parse::<u64>()
                .with_context(|| format!("invalid NARROW_TIMEOUT_SECS={raw:?}"))?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(endpoint) = value("NARROW_API_ENDPOINT") {
            config.api.general = endpoint;
        }
        if let Some(endpoint) = value("NARROW_R18_API_ENDPOINT") {
            config.api.restricted = endpoint;
        }
        if let Some(base) = value("NARROW_CONTENT_BASE") {
            config.content.general = base;
        }
        if let Some(base) = value("NARROW_R18_CONTENT_BASE") {
            config.content.restricted = base;
        }
        // Set-but-empty means host-only cookies.
        if let Some(domain) = lookup("NARROW_COOKIE_DOMAIN") {
            let domain = domain.trim().trim_start_matches('.').to_owned();
            config.content.cookie_domain = (!domain.is_empty()).then_some(domain);
        }

        Ok(config)
    }
}
