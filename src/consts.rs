pub const SERVER_HOST: &str = "127.0.0.1";
pub const SERVER_PORT: u16 = 5000;

pub const CONNECT_TIMEOUT_SECS: u64 = 30;
pub const READ_TIMEOUT_SECS: u64 = 60;

pub const ENV_FILE_NAME: &str = ".env";

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_YOUTUBE_URL: &str = "https://www.youtube.com";
pub const GOOGLE_URL: &str = "https://www.google.com";

/// Words per minute.
pub const DEFAULT_SPEECH_RATE: u32 = 165;

pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_GEMINI_MODEL: &str = "GEMINI_MODEL";
pub const ENV_GEMINI_API_URL: &str = "GEMINI_API_URL";
pub const ENV_YOUTUBE_URL: &str = "JARVIS_YOUTUBE_URL";
pub const ENV_SPEECH_RATE: &str = "JARVIS_SPEECH_RATE";
pub const ENV_FILE_PATH: &str = "JARVIS_ENV_FILE";
