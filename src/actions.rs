//! The local actions behind each command rule. Each returns the reply to speak.

use std::sync::LazyLock;

use regex::Regex;

use crate::consts;
use crate::context::AssistantContext;
use crate::messages;
use crate::system::PowerAction;

static PLAY_TRIGGER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(play|चल[ा\-]ओ|गाना|song)\s*").expect("valid play trigger pattern")
});

const CONFIRM_TOKENS: [&str; 2] = ["confirm", "पुष्टि"];

/// Removes a play trigger word at the very start of `text`.
pub fn strip_play_trigger(text: &str) -> &str {
    match PLAY_TRIGGER.find(text) {
        Some(found) => &text[found.end()..],
        None => text,
    }
}

pub fn is_confirmed(text: &str) -> bool {
    let text = text.to_lowercase();
    CONFIRM_TOKENS.iter().any(|token| text.contains(token))
}

fn open_url_logged(context: &AssistantContext, url: &str) {
    if let Err(e) = context.system.open_url(url) {
        log::warn!("failed to open {}: {}", url, e);
    }
}

pub fn open_youtube(context: &AssistantContext) -> String {
    open_url_logged(context, &context.videos.home_url());
    messages::YOUTUBE_OPENED.to_string()
}

pub fn open_browser(context: &AssistantContext) -> String {
    open_url_logged(context, consts::GOOGLE_URL);
    messages::BROWSER_OPENED.to_string()
}

pub async fn play_video(context: &AssistantContext, query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        return messages::PLAY_WHICH.to_string();
    }

    let played = match context.videos.first_video_url(query).await {
        Ok(url) => context.system.open_url(&url),
        Err(e) => Err(e),
    };

    match played {
        Ok(()) => messages::playing(query),
        Err(e) => {
            log::warn!("could not play {:?}, opening search instead: {}", query, e);
            open_url_logged(context, &context.videos.results_url(query));
            messages::PLAY_SEARCH_OPENED.to_string()
        }
    }
}

pub fn power(context: &AssistantContext, action: PowerAction, confirmed: bool) -> String {
    let (ask, sent) = match action {
        PowerAction::Shutdown => (messages::SHUTDOWN_CONFIRM, messages::SHUTDOWN_SENT),
        PowerAction::Restart => (messages::RESTART_CONFIRM, messages::RESTART_SENT),
    };

    if !confirmed {
        return ask.to_string();
    }

    if let Err(e) = context.system.power(action) {
        log::warn!("{:?} command failed: {}", action, e);
    }
    sent.to_string()
}

pub fn open_file_browser(context: &AssistantContext) -> String {
    let opened = std::env::current_dir()
        .map_err(Into::into)
        .and_then(|dir| context.system.open_file_browser(&dir));

    match opened {
        Ok(()) => messages::FILE_BROWSER_OPENED.to_string(),
        Err(e) => messages::file_browser_failed(&e.to_string()),
    }
}
