//! User-facing replies. The assistant answers in Hindi.

pub const EMPTY_COMMAND: &str = "कृपया कोई कमांड या सवाल लिखें/बोलें।";

pub const YOUTUBE_OPENED: &str = "यूट्यूब खोल रहा हूँ।";
pub const BROWSER_OPENED: &str = "ब्राउज़र खोल दिया।";

pub const PLAY_WHICH: &str = "कौन सा गाना या वीडियो?";
pub const PLAY_SEARCH_OPENED: &str = "YouTube search खोल दिया।";

pub const SHUTDOWN_CONFIRM: &str = "कृपया पुष्टि करें: 'shutdown confirm' बोलें/लिखें।";
pub const SHUTDOWN_SENT: &str = "सिस्टम शटडाउन कमांड भेज दी गई।";
pub const RESTART_CONFIRM: &str = "कृपया पुष्टि करें: 'restart confirm' बोलें/लिखें।";
pub const RESTART_SENT: &str = "सिस्टम रीस्टार्ट कमांड भेज दी गई।";

pub const FILE_BROWSER_OPENED: &str = "फ़ाइल एक्सप्लोरर खोल रहा हूँ।";

pub const API_KEY_MISSING: &str =
    "Gemini API key सेट नहीं है। .env फ़ाइल में GEMINI_API_KEY जोड़ें।";
pub const NO_ANSWER: &str = "कोई उत्तर नहीं मिला।";

pub fn playing(query: &str) -> String {
    format!("{query} YouTube पर चला रहा हूँ।")
}

pub fn file_browser_failed(error: &str) -> String {
    format!("फ़ाइल एक्सप्लोरर में समस्या: {error}")
}

pub fn answer_failed(error: &str) -> String {
    format!("Gemini से उत्तर प्राप्त करने में समस्या: {error}")
}
