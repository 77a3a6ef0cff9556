pub mod gemini;

use serde::{self, Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CommandReply {
    pub reply: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SayReply {
    pub ok: bool,
}

/// Pulls `text` out of a request body regardless of its content type.
///
/// Invalid JSON, a non-object body, a missing field and `null` all yield an empty string;
/// non-string values are rendered as JSON.
pub fn text_from_body(body: &[u8]) -> String {
    let Ok(Value::Object(fields)) = serde_json::from_slice::<Value>(body) else {
        return String::new();
    };

    match fields.get("text") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}
