use std::sync::OnceLock;

use reqwest::cookie::{CookieStore as _, Jar};
use reqwest::header::{COOKIE, USER_AGENT};
use url::Url;

use crate::config::ClientConfig;
use crate::formats::SearchResult;
use crate::query::SearchQuery;
use crate::{Error, response, site};

/// Blocking client for the search API and the content sites.
///
/// The cookie store is only created the first time age verification is
/// needed, and then lives as long as the client.
#[derive(Debug)]
pub struct Client {
    http: reqwest::blocking::Client,
    config: ClientConfig,
    cookies: OnceLock<Jar>,
}

impl Client {
    pub fn new() -> crate::Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> crate::Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            http,
            config,
            cookies: OnceLock::new(),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn search<Q: SearchQuery>(&self, query: &Q) -> crate::Result<SearchResult> {
        let url = query.to_url_with(&self.config.api)?;
        let body = self.get(&url)?.bytes()?;
        let result = response::decode(&body)?;
        tracing::debug!(
            all_count = result.all_count,
            returned = result.novels.len(),
            "search finished"
        );
        Ok(result)
    }

    /// Stores the age-verification cookie for `url`, creating the store on first use.
    pub(crate) fn accept_age_gate(&self, url: &Url) {
        let jar = self.cookies.get_or_init(Jar::default);
        let cookie = site::age_cookie(self.config.content.cookie_domain.as_deref());
        jar.add_cookie_str(&cookie, url);
        tracing::debug!(%url, "age verification cookie set");
    }

    pub(crate) fn get_text(&self, url: &Url) -> crate::Result<String> {
        Ok(self.get(url)?.text()?)
    }

    fn get(&self, url: &Url) -> crate::Result<reqwest::blocking::Response> {
        tracing::debug!(%url, "GET");

        let mut request = self
            .http
            .get(url.clone())
            .header(USER_AGENT, &self.config.user_agent);
        if let Some(cookie) = self.cookies.get().and_then(|jar| jar.cookies(url)) {
            request = request.header(COOKIE, cookie);
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(response)
    }
}
