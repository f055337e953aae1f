use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::feed::FeedMessage;

#[derive(Debug, Error)]
pub enum FeedError {
    /// The feed endpoint answered with a non-success status.
    #[error("feed returned HTTP {0}")]
    Transport(StatusCode),

    #[error("feed request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The body could not be decoded as a feed message. Malformed
    /// individual entities are dropped by the parser instead.
    #[error("malformed feed body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the poller gets feed messages from. The HTTP implementation is the
/// real one; tests script this seam directly.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch(&self) -> Result<FeedMessage, FeedError>;
}

pub struct HttpFeedSource {
    client: reqwest::Client,
    url: String,
}

impl HttpFeedSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch(&self) -> Result<FeedMessage, FeedError> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(FeedError::Transport(response.status()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
