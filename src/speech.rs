use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::errors::AssistantError;
use crate::system::Platform;

#[async_trait]
pub trait Speaker: Send + Sync {
    /// Renders `text` and resolves once the engine has finished speaking.
    async fn say(&self, text: &str) -> Result<(), AssistantError>;

    /// Like [`Speaker::say`], but failures are only logged.
    async fn speak(&self, text: &str) {
        if let Err(e) = self.say(text).await {
            log::error!("TTS error: {}", e);
        }
    }
}

/// Speaks through the platform's speech command: SAPI via PowerShell, `say` or `espeak`.
pub struct CommandSpeaker {
    platform: Platform,
    rate: u32,
}

impl CommandSpeaker {
    pub fn new(platform: Platform, rate: u32) -> Self {
        Self { platform, rate }
    }

    pub(crate) fn speech_command(&self, text: &str) -> (&'static str, Vec<String>) {
        match self.platform {
            Platform::Windows => {
                // SAPI rate runs from -10 to 10 with 0 close to 180 words per minute.
                let sapi_rate = ((self.rate as i64 - 180) / 10).clamp(-10, 10);
                let script = format!(
                    "Add-Type -AssemblyName System.Speech; \
                     $synth = New-Object System.Speech.Synthesis.SpeechSynthesizer; \
                     $synth.Rate = {}; \
                     $synth.Speak('{}');",
                    sapi_rate,
                    text.replace('\'', "''").replace(['\r', '\n'], " ")
                );
                (
                    "powershell",
                    vec!["-NoProfile".to_string(), "-Command".to_string(), script],
                )
            }
            Platform::MacOs => (
                "say",
                vec![
                    "-r".to_string(),
                    self.rate.to_string(),
                    "--".to_string(),
                    text.to_string(),
                ],
            ),
            Platform::Unix => (
                "espeak",
                vec![
                    "-s".to_string(),
                    self.rate.to_string(),
                    "--".to_string(),
                    text.to_string(),
                ],
            ),
        }
    }
}

#[async_trait]
impl Speaker for CommandSpeaker {
    async fn say(&self, text: &str) -> Result<(), AssistantError> {
        if text.trim().is_empty() {
            return Ok(());
        }

        let (program, args) = self.speech_command(text);
        let status = Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| AssistantError::SpeechError(format!("{program}: {e}")))?;

        if !status.success() {
            return Err(AssistantError::SpeechError(format!(
                "{program} exited with {status}"
            )));
        }

        Ok(())
    }
}
