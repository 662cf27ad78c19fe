//! Blocking HTTP document source

use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;
use webanalyst_core::{DocumentSource, FetchedPage, RetrievalError};

/// Fetches pages over HTTP(S). One attempt per call, no retries.
#[derive(Clone)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("webanalyst/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::from_client(client))
    }

    /// Use a preconfigured client, e.g. one with custom proxy settings
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl DocumentSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<FetchedPage, RetrievalError> {
        let parsed = parse_url(url)?;

        let response = self
            .client
            .get(parsed.as_str())
            .send()
            .map_err(|err| transport(url, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RetrievalError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().to_string();
        if final_url != parsed.as_str() {
            tracing::debug!(from = url, to = %final_url, "followed redirect");
        }
        let body = response.text().map_err(|err| transport(url, err))?;

        Ok(FetchedPage {
            url: final_url,
            status: status.as_u16(),
            body,
        })
    }
}

fn parse_url(url: &str) -> Result<Url, RetrievalError> {
    let parsed = Url::parse(url.trim()).map_err(|err| RetrievalError::InvalidUrl {
        url: url.to_string(),
        reason: err.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(RetrievalError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme {other}"),
        }),
    }
}

fn transport(url: &str, err: reqwest::Error) -> RetrievalError {
    let message = if err.is_timeout() {
        "timed out".to_string()
    } else {
        err.to_string()
    };
    RetrievalError::Transport {
        url: url.to_string(),
        message,
    }
}
