//! Ordered command table with an LLM fallback.
//!
//! Rules are tried top to bottom and the first match wins, so order decides what mixed
//! input does: "restart youtube" opens YouTube, and the restart rule never sees text that
//! also says "shutdown".

use regex::{Regex, RegexBuilder};

use crate::actions;
use crate::context::AssistantContext;
use crate::errors::AssistantError;
use crate::system::PowerAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    OpenYoutube,
    OpenBrowser,
    PlayVideo,
    Shutdown,
    Restart,
    OpenFileBrowser,
}

const COMMAND_PATTERNS: [(Action, &str); 6] = [
    (Action::OpenYoutube, r"youtube|यूट्यूब|www\.youtube\.com"),
    (Action::OpenBrowser, r"browser|ब्राउज़र|वेब"),
    (Action::PlayVideo, r"(play|चल[ा\-]ओ|गाना|song)(.*)"),
    (Action::Shutdown, r"shutdown(.*)"),
    (Action::Restart, r"restart|रीस्टार्ट|reboot"),
    (Action::OpenFileBrowser, r"file|फ़ाइल|explorer"),
];

#[derive(Debug, Clone)]
pub struct Rule {
    pub action: Action,
    pattern: Regex,
}

impl Rule {
    pub fn new(action: Action, pattern: &str) -> Result<Self, AssistantError> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self { action, pattern })
    }

    /// Unanchored search anywhere in `text`.
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

pub fn command_rules() -> Result<Vec<Rule>, AssistantError> {
    COMMAND_PATTERNS
        .iter()
        .map(|(action, pattern)| Rule::new(*action, pattern))
        .collect()
}

pub struct Dispatcher {
    rules: Vec<Rule>,
    context: AssistantContext,
}

impl Dispatcher {
    pub fn new(context: AssistantContext) -> Result<Self, AssistantError> {
        Ok(Self {
            rules: command_rules()?,
            context,
        })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn classify(&self, text: &str) -> Option<Action> {
        self.rules
            .iter()
            .find(|rule| rule.matches(text))
            .map(|rule| rule.action)
    }

    /// Runs the first matching rule on `text`, or hands `text` to the answer provider.
    /// `text` is expected to be lower-cased already.
    pub async fn dispatch(&self, text: &str) -> String {
        match self.classify(text) {
            Some(action) => {
                log::debug!("command {:?} matched {:?}", text, action);
                self.run(action, text).await
            }
            None => {
                log::debug!("no command matched {:?}, asking the model", text);
                self.context.answers.answer(text).await
            }
        }
    }

    async fn run(&self, action: Action, text: &str) -> String {
        let context = &self.context;
        match action {
            Action::OpenYoutube => actions::open_youtube(context),
            Action::OpenBrowser => actions::open_browser(context),
            Action::PlayVideo => {
                actions::play_video(context, actions::strip_play_trigger(text)).await
            }
            Action::Shutdown => {
                actions::power(context, PowerAction::Shutdown, actions::is_confirmed(text))
            }
            Action::Restart => {
                actions::power(context, PowerAction::Restart, actions::is_confirmed(text))
            }
            Action::OpenFileBrowser => actions::open_file_browser(context),
        }
    }
}
