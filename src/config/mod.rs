pub mod env_file;

use crate::consts;
use crate::errors::AssistantError;

#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_url: String,
    pub youtube_url: String,
    pub speech_rate: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: consts::DEFAULT_GEMINI_MODEL.to_string(),
            gemini_api_url: consts::DEFAULT_GEMINI_API_URL.to_string(),
            youtube_url: consts::DEFAULT_YOUTUBE_URL.to_string(),
            speech_rate: consts::DEFAULT_SPEECH_RATE,
        }
    }
}

impl Config {
    /// Builds a config from a variable lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Config::default();

        let speech_rate = match get(consts::ENV_SPEECH_RATE) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!(
                    "invalid {}: {:?}, using {}",
                    consts::ENV_SPEECH_RATE,
                    raw,
                    defaults.speech_rate
                );
                defaults.speech_rate
            }),
            None => defaults.speech_rate,
        };

        Self {
            gemini_api_key: get(consts::ENV_API_KEY),
            gemini_model: get(consts::ENV_GEMINI_MODEL).unwrap_or(defaults.gemini_model),
            gemini_api_url: get(consts::ENV_GEMINI_API_URL)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.gemini_api_url),
            youtube_url: get(consts::ENV_YOUTUBE_URL)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.youtube_url),
            speech_rate,
        }
    }
}

pub trait ConfigLoader: Send + Sync {
    fn load_config(&self) -> Result<Config, AssistantError>;
}

pub struct EnvConfigLoader;

impl EnvConfigLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader for EnvConfigLoader {
    fn load_config(&self) -> Result<Config, AssistantError> {
        Ok(Config::from_lookup(|name| std::env::var(name).ok()))
    }
}

pub fn load_config() -> Result<Config, AssistantError> {
    let loader = EnvConfigLoader::new();
    loader.load_config()
}
