//! HTTP client for the advisor service's chat endpoint.

use std::path::Path;
use std::time::Duration;

use nyaay_core::AnalysisResult;
use reqwest::multipart::{Form, Part};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::response::ChatResponse;

/// Model-backed answers are slow; the health check is not.
const ASK_TIMEOUT: Duration = Duration::from_secs(60);
const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("reading audio failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Client for the advisor's `/chat/` endpoint.
pub struct AdvisorClient {
    client: reqwest::Client,
    base_url: String,
}

impl AdvisorClient {
    /// `base_url` should be like `http://localhost:8000` (a trailing slash is dropped).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a free-text query as a form post and decode the response.
    pub async fn ask(&self, query: &str) -> Result<ChatResponse, AdvisorError> {
        info!(query_len = query.len(), "asking advisor");
        self.post_chat(Form::new().text("query", query.to_string())).await
    }

    /// Submit a recorded query as the `file` part; the service transcribes it.
    pub async fn ask_audio(&self, path: &Path) -> Result<ChatResponse, AdvisorError> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio".to_string());

        info!(file = %file_name, bytes = bytes.len(), "asking advisor with audio");
        let part = Part::bytes(bytes).file_name(file_name);
        self.post_chat(Form::new().part("file", part)).await
    }

    async fn post_chat(&self, form: Form) -> Result<ChatResponse, AdvisorError> {
        let url = format!("{}/chat/", self.base_url);
        debug!(url = %url, "posting chat form");
        let resp = self
            .client
            .post(&url)
            .multipart(form)
            .timeout(ASK_TIMEOUT)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AdvisorError::Server {
                status: status.as_u16(),
                body,
            });
        }

        // Decode from text so a malformed payload surfaces as `Json`, not `Http`.
        let body = resp.text().await?;
        let response: ChatResponse = serde_json::from_str(&body)?;
        info!(
            legal_issue = %response.legal_issue,
            urgency = response.urgency.as_deref().unwrap_or("-"),
            "advisor answered"
        );
        Ok(response)
    }

    /// Ask and keep only the analysis the templates use.
    ///
    /// Any failure is logged and treated as "no analysis available".
    pub async fn fetch_analysis(&self, query: &str) -> Option<AnalysisResult> {
        match self.ask(query).await {
            Ok(response) => Some(response.to_analysis()),
            Err(e) => {
                warn!(error = %e, "advisor unavailable, drafting without analysis");
                None
            }
        }
    }

    /// Check that `GET {base_url}/` answers with a success status.
    pub async fn health(&self) -> Result<(), AdvisorError> {
        let url = format!("{}/", self.base_url);
        let resp = self
            .client
            .get(&url)
            .timeout(HEALTH_TIMEOUT)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AdvisorError::Server {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}
