//! Runtime configuration assembled from CLI flags and environment variables.

use std::path::PathBuf;

use crate::utils::resolve_corpus_path;

/// Default speech command
pub const DEFAULT_SPEECH_PROGRAM: &str = "espeak-ng";

/// Words per minute used when no Arabic voice is available
pub const FALLBACK_SPEECH_RATE: u32 = 140;

#[derive(Debug, Clone, PartialEq)]
pub struct SpeechConfig {
    /// `espeak-ng` compatible executable
    pub program: String,
    pub fallback_rate: u32,
    /// 1.0 is normal volume
    pub volume: f32,
    /// Case-insensitive substrings identifying an Arabic-capable voice
    pub voice_hints: Vec<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_SPEECH_PROGRAM.to_string(),
            fallback_rate: FALLBACK_SPEECH_RATE,
            volume: 1.0,
            voice_hints: ["arabic", "hussain", "middle east"].map(String::from).to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub corpus_path: PathBuf,
    pub speech: SpeechConfig,
}

impl AppConfig {
    pub fn new(corpus: Option<PathBuf>, speech_program: Option<String>) -> Self {
        let mut speech = SpeechConfig::default();
        if let Some(program) = speech_program {
            speech.program = program;
        }

        Self { corpus_path: resolve_corpus_path(corpus.as_deref()), speech }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speech_defaults() {
        let config = SpeechConfig::default();
        assert_eq!(config.program, "espeak-ng");
        assert_eq!(config.fallback_rate, 140);
        assert_eq!(config.volume, 1.0);
        assert_eq!(config.voice_hints, vec!["arabic", "hussain", "middle east"]);
    }

    #[test]
    fn test_app_config_overrides() {
        let config = AppConfig::new(Some(PathBuf::from("/tmp/q.json")), Some("say".to_string()));
        assert_eq!(config.corpus_path, PathBuf::from("/tmp/q.json"));
        assert_eq!(config.speech.program, "say");
    }
}
