use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode, Url};

use crate::parse_error::{ParseError, Result};

const DEFAULT_BASE_URL: &str = "https://bato.to";
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:107.0) Gecko/20100101 Firefox/107.0";

/// Shared request state, threaded into the client rather than kept in
/// module globals. The cookie is an injectable credential.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub base_url: Url,
    pub user_agent: String,
    pub cookie: Option<String>,
    pub timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            base_url: Url::parse(DEFAULT_BASE_URL).unwrap(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            cookie: None,
            timeout: Duration::from_secs(5),
        }
    }
}

impl SourceConfig {
    /// Scheme+host prefix used to absolutize relative hrefs.
    pub fn origin(&self) -> String {
        self.base_url.as_str().trim_end_matches('/').to_owned()
    }
}

/// The transport collaborator. One GET, raw body out; everything else
/// (parsing, extraction) happens on this side of the seam.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str) -> Result<String>;
}

pub struct ReqwestClient {
    client: Client,
    user_agent: String,
    cookie: Option<String>,
    timeout: Duration,
}

impl ReqwestClient {
    pub fn new(config: &SourceConfig) -> Self {
        ReqwestClient {
            client: Client::new(),
            user_agent: config.user_agent.clone(),
            cookie: config.cookie.clone(),
            timeout: config.timeout,
        }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<String> {
        debug!("GET {url}");
        let mut builder = self
            .client
            .get(url)
            .header(header::USER_AGENT, &self.user_agent)
            .header(header::ACCEPT, "*/*")
            .header(header::REFERER, url)
            .timeout(self.timeout);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        let response = builder.send().await?;

        if response.status() == StatusCode::FORBIDDEN {
            return Err(ParseError::CloudflareIUAM);
        }
        if !response.status().is_success() {
            return Err(ParseError::NetworkError(response.status()));
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_drops_the_trailing_slash() {
        let config = SourceConfig::default();
        assert_eq!(config.origin(), "https://bato.to");
    }

    #[test]
    fn base_url_is_overridable() {
        let config = SourceConfig {
            base_url: Url::parse("https://mirror.example/").unwrap(),
            ..SourceConfig::default()
        };
        assert_eq!(config.origin(), "https://mirror.example");
    }
}
