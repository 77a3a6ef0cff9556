use async_trait::async_trait;

use crate::config::Config;
use crate::errors::AssistantError;
use crate::messages;
use crate::models::gemini::{GenerateContentRequest, GenerateContentResponse};

/// Fallback for text no command rule recognised.
#[async_trait]
pub trait AnswerProvider: Send + Sync {
    /// Always produces a user-facing string, including for failures.
    async fn answer(&self, prompt: &str) -> String;
}

pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(client: reqwest::Client, base_url: &str, model: &str, api_key: Option<&str>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.map(str::to_string),
        }
    }

    pub fn from_config(client: reqwest::Client, config: &Config) -> Self {
        Self::new(
            client,
            &config.gemini_api_url,
            &config.gemini_model,
            config.gemini_api_key.as_deref(),
        )
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Single `generateContent` call; returns the trimmed text of the first candidate.
    pub async fn generate(&self, prompt: &str) -> Result<String, AssistantError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AssistantError::ConfigError(format!("{} is not set", crate::consts::ENV_API_KEY))
        })?;

        let response = self
            .client
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.base_url, self.model
            ))
            .header("x-goog-api-key", api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(AssistantError::ApiError(format!(
                "status {status}, text {text}"
            )));
        }

        let body: GenerateContentResponse = response.json().await?;
        Ok(body.text().trim().to_string())
    }
}

#[async_trait]
impl AnswerProvider for GeminiClient {
    async fn answer(&self, prompt: &str) -> String {
        if !self.has_api_key() {
            return messages::API_KEY_MISSING.to_string();
        }

        match self.generate(prompt).await {
            Ok(text) if text.is_empty() => messages::NO_ANSWER.to_string(),
            Ok(text) => text,
            Err(e) => {
                log::error!("gemini request failed: {}", e);
                messages::answer_failed(&e.to_string())
            }
        }
    }
}
