//! Text-to-speech output and the "recite last verse" trigger.
//!
//! The voice engine is an explicitly constructed value implementing [`SpeechSink`];
//! nothing here holds global state. Tests substitute a recording sink.

pub mod replay;
pub mod voice;

pub use replay::replay_last;
pub use voice::{SpeechSink, Voice, VoiceEngine, list_voices, parse_voice_listing, select_voice};
