use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use crate::errors::AssistantError;

static VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:"videoId":"|/watch\?v=)([A-Za-z0-9_-]{11})"#).expect("valid video id pattern")
});

/// Words of `query` percent-encoded and joined with `+`.
pub fn search_param(query: &str) -> String {
    query
        .split_whitespace()
        .map(|word| urlencoding::encode(word).into_owned())
        .collect::<Vec<_>>()
        .join("+")
}

#[async_trait]
pub trait VideoSearch: Send + Sync {
    /// Watch URL of the best match for `query`.
    async fn first_video_url(&self, query: &str) -> Result<String, AssistantError>;

    /// Search results page for `query`, used when no single video could be resolved.
    fn results_url(&self, query: &str) -> String;

    fn home_url(&self) -> String;
}

pub struct YoutubeSearch {
    client: reqwest::Client,
    base_url: String,
}

impl YoutubeSearch {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn first_video_id(page: &str) -> Option<&str> {
        VIDEO_ID
            .captures(page)
            .and_then(|captures| captures.get(1))
            .map(|id| id.as_str())
    }
}

#[async_trait]
impl VideoSearch for YoutubeSearch {
    async fn first_video_url(&self, query: &str) -> Result<String, AssistantError> {
        let response = self
            .client
            .get(self.results_url(query))
            .header(reqwest::header::USER_AGENT, "Mozilla/5.0")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AssistantError::ApiError(format!(
                "video search failed with status {}",
                response.status()
            )));
        }

        let page = response.text().await?;
        let id = Self::first_video_id(&page).ok_or_else(|| {
            AssistantError::ParseError(format!("no video found for {query:?}"))
        })?;

        Ok(format!("{}/watch?v={}", self.base_url, id))
    }

    fn results_url(&self, query: &str) -> String {
        format!("{}/results?search_query={}", self.base_url, search_param(query))
    }

    fn home_url(&self) -> String {
        self.base_url.clone()
    }
}
