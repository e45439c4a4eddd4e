use std::fmt;
use std::path::PathBuf;

use anyhow::Result;

use crate::model::TranscriptionResult;

/// Whisper model sizes the surrounding application can ask for. Medium is
/// the default recommendation; tiny is fastest, large most accurate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ModelSize {
    Tiny,
    Base,
    Small,
    #[default]
    Medium,
    Large,
}

impl ModelSize {
    pub fn as_str(self) -> &'static str {
        match self {
            ModelSize::Tiny => "tiny",
            ModelSize::Base => "base",
            ModelSize::Small => "small",
            ModelSize::Medium => "medium",
            ModelSize::Large => "large",
        }
    }
}

impl fmt::Display for ModelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language hints understood by the recognition boundary, as
/// `(code, english name)` pairs. "auto" means no hint at all.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("auto", "Auto detect"),
    ("zh", "Chinese"),
    ("en", "English"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("fr", "French"),
    ("de", "German"),
    ("es", "Spanish"),
    ("ru", "Russian"),
];

/// Normalize a language hint. Empty or "auto" becomes `None`
/// (auto-detect); anything else is lowercased and passed through, since
/// recognizers accept more codes than the curated list above.
pub fn resolve_language(hint: &str) -> Option<String> {
    let hint = hint.trim();
    if hint.is_empty() || hint.eq_ignore_ascii_case("auto") {
        return None;
    }
    Some(hint.to_ascii_lowercase())
}

pub fn list_supported_languages() -> String {
    let mut output = String::new();
    output.push_str("\nSupported language hints:");
    for (code, name) in SUPPORTED_LANGUAGES {
        output.push_str(&format!("\n  {code:<6} {name}"));
    }
    output
}

/// What the surrounding application hands to a recognition engine.
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    /// Path to the uploaded audio file.
    pub audio: PathBuf,
    /// Language hint, `None` for auto-detect.
    pub language: Option<String>,
    pub model: ModelSize,
}

impl TranscriptionRequest {
    pub fn new(audio: impl Into<PathBuf>, language_hint: &str, model: ModelSize) -> Self {
        Self {
            audio: audio.into(),
            language: resolve_language(language_hint),
            model,
        }
    }
}

/// The external recognition engine, seen from this crate. Implementations
/// own model loading, device selection, cancellation, and temp-file
/// lifecycle; only the request/result shapes cross this boundary.
pub trait SpeechRecognizer {
    fn transcribe(&self, request: &TranscriptionRequest) -> Result<TranscriptionResult>;
}
