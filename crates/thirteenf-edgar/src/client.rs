//! Page fetching for EDGAR.
//!
//! [`PageFetcher`] is the seam the walker talks through: [`HttpFetcher`] does
//! real GETs with a timeout, [`MemoryFetcher`] replays pages held in memory.

use crate::config::EdgarConfig;
use crate::error::{EdgarError, Result};
use crate::identifier::Identifier;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use tracing::debug;
use url::Url;

/// Something that can turn a URL into page markup.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Issue one GET and return the body of a 200 response.
    ///
    /// # Errors
    /// `Timeout` when no response arrives in time, `RemoteStatus` for any
    /// status other than 200.
    async fn fetch(&self, url: &Url) -> Result<String>;
}

impl EdgarConfig {
    /// Build the company search URL for `identifier`, capped at `count` results.
    ///
    /// # Example
    /// ```
    /// # use thirteenf_edgar::{EdgarConfig, Identifier};
    /// let url = EdgarConfig::default()
    ///     .search_url(&Identifier::parse("0001166559").unwrap(), 40)
    ///     .unwrap();
    /// assert_eq!(
    ///     url.as_str(),
    ///     "https://www.sec.gov/cgi-bin/browse-edgar?action=getcompany&CIK=0001166559&count=40"
    /// );
    /// ```
    pub fn search_url(&self, identifier: &Identifier, count: usize) -> Result<Url> {
        let endpoint = self.resolve(&self.search_path)?;
        let count = count.to_string();
        let url = Url::parse_with_params(
            endpoint.as_str(),
            &[
                ("action", "getcompany"),
                ("CIK", identifier.as_str()),
                ("count", count.as_str()),
            ],
        )?;
        Ok(url)
    }

    /// Resolve a link found in fetched markup against the configured origin.
    pub fn resolve(&self, link: &str) -> Result<Url> {
        Ok(Url::parse(&self.origin)?.join(link)?)
    }
}

/// HTTP fetcher backed by `reqwest`.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher using the timeout and user agent from `config`.
    pub fn new(config: &EdgarConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(EdgarError::Network)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        debug!(%url, "GET");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| EdgarError::from_transport(e, url.as_str()))?;

        if response.status() != StatusCode::OK {
            return Err(EdgarError::RemoteStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| EdgarError::from_transport(e, url.as_str()))
    }
}

impl std::fmt::Debug for HttpFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpFetcher").finish_non_exhaustive()
    }
}

/// Fetcher serving pages from memory, keyed by URL path.
///
/// Every request is recorded, served or not. Unknown paths answer like a host
/// returning 404.
#[derive(Debug, Default)]
pub struct MemoryFetcher {
    pages: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl MemoryFetcher {
    /// Create an empty fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for requests whose path equals `path`.
    pub fn with_page(mut self, path: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.insert(path.into(), body.into());
        self
    }

    /// Full URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of requests made so far.
    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl PageFetcher for MemoryFetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url.to_string());

        self.pages
            .get(url.path())
            .cloned()
            .ok_or_else(|| EdgarError::RemoteStatus {
                status: StatusCode::NOT_FOUND.as_u16(),
                url: url.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_link() {
        let config = EdgarConfig::default();
        let url = config
            .resolve("/Archives/edgar/data/1166559/000110465919029714/index.htm")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.sec.gov/Archives/edgar/data/1166559/000110465919029714/index.htm"
        );
    }

    #[test]
    fn test_resolve_keeps_absolute_link() {
        let config = EdgarConfig::default();
        let url = config.resolve("https://example.com/doc.html").unwrap();
        assert_eq!(url.as_str(), "https://example.com/doc.html");
    }

    #[test]
    fn test_search_url_uses_configured_origin() {
        let config = EdgarConfig {
            origin: "http://127.0.0.1:8080".to_string(),
            ..EdgarConfig::default()
        };
        let id = Identifier::parse("320193").unwrap();
        let url = config.search_url(&id, 5).unwrap();
        assert_eq!(url.host_str(), Some("127.0.0.1"));
        assert_eq!(url.path(), "/cgi-bin/browse-edgar");
        assert_eq!(url.query(), Some("action=getcompany&CIK=320193&count=5"));
    }

    #[tokio::test]
    async fn test_memory_fetcher_records_requests() {
        let fetcher = MemoryFetcher::new().with_page("/a.htm", "<p>a</p>");
        let config = EdgarConfig::default();

        let body = fetcher.fetch(&config.resolve("/a.htm").unwrap()).await;
        assert_eq!(body.unwrap(), "<p>a</p>");

        let missing = fetcher.fetch(&config.resolve("/b.htm").unwrap()).await;
        assert!(matches!(
            missing,
            Err(EdgarError::RemoteStatus { status: 404, .. })
        ));

        assert_eq!(fetcher.request_count(), 2);
        assert_eq!(
            fetcher.requests(),
            vec![
                "https://www.sec.gov/a.htm".to_string(),
                "https://www.sec.gov/b.htm".to_string()
            ]
        );
    }
}
