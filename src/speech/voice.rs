use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};
use tracing::{debug, info, warn};

use crate::config::SpeechConfig;

/// Blocking text-to-speech output.
///
/// Implementations synthesize and play `text`, returning once playback finishes.
/// Callers hold the sink by `&mut`, so at most one utterance is in flight.
pub trait SpeechSink {
    fn speak(&mut self, text: &str) -> Result<()>;
}

/// A voice reported by the speech engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    /// Identifier passed to `-v`
    pub id: String,
    /// Human-readable name, underscores replaced by spaces
    pub name: String,
}

/// Speech engine backed by an `espeak-ng` compatible command.
///
/// Constructed once and passed explicitly to whoever needs to speak.
#[derive(Debug, Clone)]
pub struct VoiceEngine {
    program: String,
    voices: Vec<Voice>,
    voice: Option<Voice>,
    rate: Option<u32>,
    amplitude: u32,
}

impl VoiceEngine {
    /// Query the engine's voices and pick an Arabic-capable one.
    ///
    /// If no voice matches the configured hints (or the engine cannot list voices),
    /// the default voice is used at the fixed fallback rate.
    pub fn init(config: &SpeechConfig) -> Self {
        let voices = match list_voices(&config.program) {
            Ok(voices) => voices,
            Err(e) => {
                warn!(program = %config.program, "could not list voices: {:#}", e);
                Vec::new()
            }
        };

        let engine = Self::with_voices(config, voices);
        match &engine.voice {
            Some(voice) => info!(voice = %voice.name, id = %voice.id, "selected Arabic voice"),
            None => info!(rate = config.fallback_rate, "no Arabic voice found, using fallback rate"),
        }
        engine
    }

    /// Build an engine from an already-known voice list
    pub fn with_voices(config: &SpeechConfig, voices: Vec<Voice>) -> Self {
        let voice = select_voice(&voices, &config.voice_hints).cloned();
        let rate = if voice.is_some() { None } else { Some(config.fallback_rate) };

        Self {
            program: config.program.clone(),
            voices,
            voice,
            rate,
            amplitude: volume_to_amplitude(config.volume),
        }
    }

    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }

    pub fn selected_voice(&self) -> Option<&Voice> {
        self.voice.as_ref()
    }

    pub fn rate(&self) -> Option<u32> {
        self.rate
    }

    /// Arguments for one utterance (program name excluded)
    fn command_args(&self, text: &str) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(voice) = &self.voice {
            args.push("-v".to_string());
            args.push(voice.id.clone());
        }
        if let Some(rate) = self.rate {
            args.push("-s".to_string());
            args.push(rate.to_string());
        }
        args.push("-a".to_string());
        args.push(self.amplitude.to_string());
        args.push(text.to_string());
        args
    }
}

impl SpeechSink for VoiceEngine {
    fn speak(&mut self, text: &str) -> Result<()> {
        debug!(program = %self.program, chars = text.chars().count(), "speaking");
        let status = Command::new(&self.program)
            .args(self.command_args(text))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .with_context(|| format!("Failed to run speech command '{}'", self.program))?;

        if !status.success() {
            bail!("Speech command '{}' exited with {}", self.program, status);
        }
        Ok(())
    }
}

/// Run `<program> --voices` and parse its listing
pub fn list_voices(program: &str) -> Result<Vec<Voice>> {
    let output = Command::new(program)
        .arg("--voices")
        .stdin(Stdio::null())
        .output()
        .with_context(|| format!("Failed to run '{} --voices'", program))?;

    if !output.status.success() {
        bail!("'{} --voices' exited with {}", program, output.status);
    }

    Ok(parse_voice_listing(&String::from_utf8_lossy(&output.stdout)))
}

/// Parse an espeak-ng style voice table:
///
/// ```text
/// Pty Language       Age/Gender VoiceName          File                 Other Languages
///  5  ar              --/M      Arabic             sem/ar
/// ```
pub fn parse_voice_listing(listing: &str) -> Vec<Voice> {
    listing
        .lines()
        .filter(|line| !line.trim_start().starts_with("Pty"))
        .filter_map(|line| {
            let columns: Vec<&str> = line.split_whitespace().collect();
            if columns.len() < 4 {
                return None;
            }
            Some(Voice { id: columns[1].to_string(), name: columns[3].replace('_', " ") })
        })
        .collect()
}

/// First voice whose name contains any hint (case-insensitive)
pub fn select_voice<'v>(voices: &'v [Voice], hints: &[String]) -> Option<&'v Voice> {
    voices.iter().find(|voice| {
        let name = voice.name.to_lowercase();
        hints.iter().any(|hint| name.contains(&hint.to_lowercase()))
    })
}

/// espeak amplitude is 0..=200 with 100 as normal volume
fn volume_to_amplitude(volume: f32) -> u32 {
    (volume.clamp(0.0, 2.0) * 100.0).round() as u32
}
