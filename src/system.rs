//! OS side effects: browser, file browser, power control.
//!
//! Every command is spawned and left to run; whether it succeeded is never checked.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::errors::AssistantError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Unix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Unix
        }
    }

    pub fn power_command(self, action: PowerAction) -> (&'static str, Vec<String>) {
        let args: &[&str] = match (self, action) {
            (Platform::Windows, PowerAction::Shutdown) => &["/s", "/t", "5"],
            (Platform::Windows, PowerAction::Restart) => &["/r", "/t", "5"],
            (Platform::MacOs, PowerAction::Shutdown) => {
                &["-e", "tell app \"System Events\" to shut down"]
            }
            (Platform::MacOs, PowerAction::Restart) => {
                &["-e", "tell app \"System Events\" to restart"]
            }
            (Platform::Unix, PowerAction::Shutdown) => &["-h", "now"],
            (Platform::Unix, PowerAction::Restart) => &["-r", "now"],
        };
        let program = match self {
            Platform::MacOs => "osascript",
            Platform::Windows | Platform::Unix => "shutdown",
        };
        (program, args.iter().map(|arg| arg.to_string()).collect())
    }

    pub fn file_browser_command(self, dir: &Path) -> (&'static str, Vec<String>) {
        let program = match self {
            Platform::Windows => "explorer",
            Platform::MacOs => "open",
            Platform::Unix => "xdg-open",
        };
        (program, vec![dir.display().to_string()])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerAction {
    Shutdown,
    Restart,
}

pub trait SystemController: Send + Sync {
    fn open_url(&self, url: &str) -> Result<(), AssistantError>;

    fn open_file_browser(&self, dir: &Path) -> Result<(), AssistantError>;

    fn power(&self, action: PowerAction) -> Result<(), AssistantError>;
}

pub struct OsSystemController {
    platform: Platform,
}

impl OsSystemController {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    fn spawn(program: &str, args: &[String]) -> Result<(), AssistantError> {
        log::debug!("spawning {} {:?}", program, args);
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| AssistantError::SystemError(format!("{program}: {e}")))?;
        Ok(())
    }
}

impl Default for OsSystemController {
    fn default() -> Self {
        Self::new(Platform::current())
    }
}

impl SystemController for OsSystemController {
    fn open_url(&self, url: &str) -> Result<(), AssistantError> {
        log::info!("opening {}", url);
        open::that_detached(url)
            .map_err(|e| AssistantError::SystemError(format!("cannot open {url}: {e}")))
    }

    fn open_file_browser(&self, dir: &Path) -> Result<(), AssistantError> {
        let (program, args) = self.platform.file_browser_command(dir);
        Self::spawn(program, &args)
    }

    fn power(&self, action: PowerAction) -> Result<(), AssistantError> {
        log::warn!("issuing {:?} on {:?}", action, self.platform);
        let (program, args) = self.platform.power_command(action);
        Self::spawn(program, &args)
    }
}
