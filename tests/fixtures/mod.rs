use serde_json::{Value, json};

pub fn gemini_answer(text: &str) -> Value {
    json!({
        "candidates": [
            {
                "content": {
                    "role": "model",
                    "parts": [{"text": text}]
                },
                "finishReason": "STOP",
                "index": 0
            }
        ],
        "usageMetadata": {
            "promptTokenCount": 8,
            "candidatesTokenCount": 12,
            "totalTokenCount": 20
        }
    })
}

pub fn gemini_blocked() -> Value {
    json!({
        "promptFeedback": {"blockReason": "SAFETY"}
    })
}

pub fn gemini_error() -> Value {
    json!({
        "error": {
            "code": 500,
            "message": "Internal error encountered.",
            "status": "INTERNAL"
        }
    })
}

pub const VIDEO_ID: &str = "kJQP7kiw5Fk";

pub fn youtube_results_page() -> String {
    format!(
        r#"<!DOCTYPE html><html><body><script nonce="x">var ytInitialData = {{"contents":{{"itemSectionRenderer":{{"contents":[{{"videoRenderer":{{"videoId":"{VIDEO_ID}","title":{{"runs":[{{"text":"Despacito"}}]}}}}}},{{"videoRenderer":{{"videoId":"aaaaaaaaaaa"}}}}]}}}}}};</script></body></html>"#
    )
}

pub fn youtube_empty_page() -> String {
    r#"<!DOCTYPE html><html><body><script>var ytInitialData = {"contents":{}};</script></body></html>"#
        .to_string()
}
