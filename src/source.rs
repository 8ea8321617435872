//! Skill Source
//!
//! Fetches the skill document from the aiwd registry over HTTP. The trait
//! seam keeps the installer testable without a live endpoint.

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::config::REMOTE_SKILL_PATH;

/// Errors from fetching the remote skill document.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The HTTP request itself failed (DNS, connect, read).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The registry answered with a non-success status.
    #[error("registry returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

/// Anything that can produce the skill document.
#[async_trait]
pub trait SkillSource: Send + Sync {
    /// Fetch the skill document as UTF-8 text.
    async fn fetch_skill(&self) -> Result<String, SourceError>;
}

/// HTTP-backed skill source pointed at a registry origin.
pub struct HttpSkillSource {
    origin: String,
    http: reqwest::Client,
}

impl HttpSkillSource {
    /// Create a new source for `origin` (no trailing slash).
    pub fn new(origin: String) -> Self {
        Self {
            origin,
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SkillSource for HttpSkillSource {
    async fn fetch_skill(&self) -> Result<String, SourceError> {
        let url = format!("{}{}", self.origin, REMOTE_SKILL_PATH);
        debug!("fetching skill from {}", url);

        let resp = self.http.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status { status, url });
        }

        let content = resp.text().await?;
        debug!("fetched {} bytes", content.len());
        Ok(content)
    }
}
