use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use jarvis_backend::context::AssistantContext;
use jarvis_backend::errors::AssistantError;
use jarvis_backend::llm_client::AnswerProvider;
use jarvis_backend::speech::Speaker;
use jarvis_backend::system::{PowerAction, SystemController};
use jarvis_backend::video::{VideoSearch, search_param};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    OpenUrl(String),
    OpenFileBrowser(PathBuf),
    Power(PowerAction),
}

#[derive(Default)]
pub struct MockSystem {
    calls: Mutex<Vec<Call>>,
}

impl MockSystem {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl SystemController for MockSystem {
    fn open_url(&self, url: &str) -> Result<(), AssistantError> {
        self.calls.lock().unwrap().push(Call::OpenUrl(url.to_string()));
        Ok(())
    }

    fn open_file_browser(&self, dir: &Path) -> Result<(), AssistantError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::OpenFileBrowser(dir.to_path_buf()));
        Ok(())
    }

    fn power(&self, action: PowerAction) -> Result<(), AssistantError> {
        self.calls.lock().unwrap().push(Call::Power(action));
        Ok(())
    }
}

pub struct MockVideos;

#[async_trait]
impl VideoSearch for MockVideos {
    async fn first_video_url(&self, query: &str) -> Result<String, AssistantError> {
        Ok(format!("https://www.youtube.com/watch?v={}", search_param(query)))
    }

    fn results_url(&self, query: &str) -> String {
        format!(
            "https://www.youtube.com/results?search_query={}",
            search_param(query)
        )
    }

    fn home_url(&self) -> String {
        "https://www.youtube.com".to_string()
    }
}

#[derive(Default)]
pub struct MockAnswers {
    prompts: Mutex<Vec<String>>,
}

impl MockAnswers {
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnswerProvider for MockAnswers {
    async fn answer(&self, prompt: &str) -> String {
        self.prompts.lock().unwrap().push(prompt.to_string());
        format!("model says: {prompt}")
    }
}

#[derive(Default)]
pub struct MockSpeaker {
    spoken: Mutex<Vec<String>>,
    broken: bool,
}

impl MockSpeaker {
    pub fn broken() -> Self {
        Self {
            spoken: Mutex::new(vec![]),
            broken: true,
        }
    }

    pub fn spoken(&self) -> Vec<String> {
        self.spoken.lock().unwrap().clone()
    }
}

#[async_trait]
impl Speaker for MockSpeaker {
    async fn say(&self, text: &str) -> Result<(), AssistantError> {
        self.spoken.lock().unwrap().push(text.to_string());
        if self.broken {
            return Err(AssistantError::SpeechError("no audio device".to_string()));
        }
        Ok(())
    }
}

pub struct MockContext {
    pub context: AssistantContext,
    pub system: Arc<MockSystem>,
    pub answers: Arc<MockAnswers>,
}

impl MockContext {
    pub fn new() -> Self {
        Self::with_videos(Arc::new(MockVideos))
    }

    pub fn with_videos(videos: Arc<dyn VideoSearch>) -> Self {
        let system = Arc::new(MockSystem::default());
        let answers = Arc::new(MockAnswers::default());
        let context = AssistantContext::new(system.clone(), videos, answers.clone());
        Self {
            context,
            system,
            answers,
        }
    }
}
