use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::context::AssistantContext;
use crate::errors::AssistantError;
use crate::llm_client::AnswerProvider;
use crate::system::{PowerAction, SystemController};
use crate::video::{VideoSearch, search_param};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    OpenUrl(String),
    OpenFileBrowser(PathBuf),
    Power(PowerAction),
}

#[derive(Default)]
pub struct FakeSystem {
    calls: Mutex<Vec<Call>>,
    failure: Mutex<Option<String>>,
}

impl FakeSystem {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    fn record(&self, call: Call) -> Result<(), AssistantError> {
        self.calls.lock().unwrap().push(call);
        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(AssistantError::SystemError(message.clone())),
            None => Ok(()),
        }
    }
}

impl SystemController for FakeSystem {
    fn open_url(&self, url: &str) -> Result<(), AssistantError> {
        self.record(Call::OpenUrl(url.to_string()))
    }

    fn open_file_browser(&self, dir: &Path) -> Result<(), AssistantError> {
        self.record(Call::OpenFileBrowser(dir.to_path_buf()))
    }

    fn power(&self, action: PowerAction) -> Result<(), AssistantError> {
        self.record(Call::Power(action))
    }
}

pub struct FakeVideos {
    result: Mutex<Result<String, AssistantError>>,
    queries: Mutex<Vec<String>>,
}

impl Default for FakeVideos {
    fn default() -> Self {
        Self {
            result: Mutex::new(Ok("https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string())),
            queries: Mutex::new(vec![]),
        }
    }
}

impl FakeVideos {
    pub fn resolve_to(&self, url: &str) {
        *self.result.lock().unwrap() = Ok(url.to_string());
    }

    pub fn fail_with(&self, error: AssistantError) {
        *self.result.lock().unwrap() = Err(error);
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl VideoSearch for FakeVideos {
    async fn first_video_url(&self, query: &str) -> Result<String, AssistantError> {
        self.queries.lock().unwrap().push(query.to_string());
        self.result.lock().unwrap().clone()
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
pub struct FakeAnswers {
    prompts: Mutex<Vec<String>>,
}

impl FakeAnswers {
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn reply_for(prompt: &str) -> String {
        format!("answer to: {prompt}")
    }
}

#[async_trait]
impl AnswerProvider for FakeAnswers {
    async fn answer(&self, prompt: &str) -> String {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Self::reply_for(prompt)
    }
}

pub struct TestContext {
    pub context: AssistantContext,
    pub system: Arc<FakeSystem>,
    pub videos: Arc<FakeVideos>,
    pub answers: Arc<FakeAnswers>,
}

impl TestContext {
    pub fn new() -> Self {
        let system = Arc::new(FakeSystem::default());
        let videos = Arc::new(FakeVideos::default());
        let answers = Arc::new(FakeAnswers::default());
        let context = AssistantContext::new(system.clone(), videos.clone(), answers.clone());

        Self {
            context,
            system,
            videos,
            answers,
        }
    }
}
