use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::{AnswerProvider, GeminiClient};
use crate::system::{OsSystemController, SystemController};
use crate::video::{VideoSearch, YoutubeSearch};

/// Capabilities the command handlers act through.
#[derive(Clone)]
pub struct AssistantContext {
    pub system: Arc<dyn SystemController>,
    pub videos: Arc<dyn VideoSearch>,
    pub answers: Arc<dyn AnswerProvider>,
}

impl AssistantContext {
    pub fn new(
        system: Arc<dyn SystemController>,
        videos: Arc<dyn VideoSearch>,
        answers: Arc<dyn AnswerProvider>,
    ) -> Self {
        Self {
            system,
            videos,
            answers,
        }
    }

    /// Real OS, YouTube and Gemini implementations for the host platform.
    pub fn from_config(http_client: reqwest::Client, config: &Config) -> Self {
        Self::new(
            Arc::new(OsSystemController::default()),
            Arc::new(YoutubeSearch::new(http_client.clone(), &config.youtube_url)),
            Arc::new(GeminiClient::from_config(http_client, config)),
        )
    }
}
