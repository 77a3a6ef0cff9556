use std::fmt;

#[derive(Debug, Clone)]
pub enum AssistantError {
    ConfigError(String),
    ApiError(String),
    NetworkError(String),
    ParseError(String),
    SystemError(String),
    SpeechError(String),
}

impl fmt::Display for AssistantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssistantError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            AssistantError::ApiError(msg) => write!(f, "API error: {}", msg),
            AssistantError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            AssistantError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            AssistantError::SystemError(msg) => write!(f, "System error: {}", msg),
            AssistantError::SpeechError(msg) => write!(f, "Speech error: {}", msg),
        }
    }
}

impl std::error::Error for AssistantError {}

impl From<reqwest::Error> for AssistantError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            AssistantError::NetworkError(err.to_string())
        } else if err.is_decode() {
            AssistantError::ParseError(err.to_string())
        } else {
            AssistantError::ApiError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AssistantError {
    fn from(err: serde_json::Error) -> Self {
        AssistantError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for AssistantError {
    fn from(err: std::io::Error) -> Self {
        AssistantError::SystemError(err.to_string())
    }
}

impl From<regex::Error> for AssistantError {
    fn from(err: regex::Error) -> Self {
        AssistantError::ConfigError(err.to_string())
    }
}
