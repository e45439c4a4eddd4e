//! Open Caption turns speech-recognition output (ordered, timed transcript
//! segments) into subtitle and text files: SRT, VTT, TSV, plain text, and
//! JSON. The conversion core is pure and synchronous; recognition itself
//! stays behind the [`recognizer::SpeechRecognizer`] boundary.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod formats;
pub mod model;
pub mod recognizer;
pub mod server;
pub mod timestamp;

pub use error::{ConvertError, TimestampError};
pub use formats::SubtitleFormat;
pub use model::{Segment, TranscriptionResult};
