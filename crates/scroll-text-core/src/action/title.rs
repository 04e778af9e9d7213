//! Remote title lookup
//!
//! A key configured with empty text shows a title fetched from a
//! [`TitleSource`] instead. Failures never reach the engine: the controller
//! logs them and keeps the configured text.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Proxy};
use url::Url;

use crate::config::TitleConfig;
use crate::{Error, Result};

const MAX_TITLE_BYTES: usize = 64 * 1024;

/// Provider of a replacement title
#[async_trait]
pub trait TitleSource: Send + Sync {
    /// Fetch the current title; `None` when the source has nothing to show
    async fn fetch_title(&self) -> Result<Option<String>>;
}

/// Title read from the body of an HTTP GET
pub struct HttpTitleSource {
    client: Client,
    url: Url,
}

impl HttpTitleSource {
    pub fn new(url: &str, timeout_secs: u64, proxy_url: &Option<String>) -> Result<Self> {
        let url = Url::parse(url)?;
        let client = Self::build_client(timeout_secs, proxy_url)?;
        Ok(Self { client, url })
    }

    /// Build from config; `None` when no URL is configured
    pub fn from_config(config: &TitleConfig) -> Result<Option<Self>> {
        match config.url.as_deref() {
            Some(url) if !url.trim().is_empty() => Ok(Some(Self::new(
                url,
                config.request_timeout_secs,
                &config.proxy_url,
            )?)),
            _ => Ok(None),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Build HTTP client with optional proxy
    fn build_client(timeout_secs: u64, proxy_url: &Option<String>) -> Result<Client> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(reqwest::redirect::Policy::limited(5));

        if let Some(ref proxy) = proxy_url {
            let proxy = Proxy::all(proxy)
                .map_err(|e| Error::Config(format!("Invalid proxy URL: {}", e)))?;
            builder = builder.proxy(proxy);
            tracing::info!("Using HTTP proxy for title fetching");
        }

        builder.build().map_err(Error::Http)
    }
}

#[async_trait]
impl TitleSource for HttpTitleSource {
    async fn fetch_title(&self) -> Result<Option<String>> {
        tracing::debug!("Fetching title from {}", self.url);
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        if body.len() > MAX_TITLE_BYTES {
            return Err(Error::TitleSource(format!(
                "response too large ({} bytes)",
                body.len()
            )));
        }

        Ok(first_line(&String::from_utf8_lossy(&body)))
    }
}

/// First non-blank line of `body`, trimmed
pub fn first_line(body: &str) -> Option<String> {
    body.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
