use thiserror::Error;

/// Invalid input to timestamp formatting. Timestamps come from the
/// recognizer as plain seconds, so the only ways to go wrong are a
/// negative offset or a non-finite number.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TimestampError {
    #[error("negative seconds value: {0}")]
    Negative(f64),
    #[error("seconds value is not a finite number")]
    NotFinite,
}

/// Conversion failure, with enough context to point at the offending
/// segment in an error message.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("segment {index}: invalid {field} timestamp")]
    Timestamp {
        index: usize,
        field: &'static str,
        #[source]
        source: TimestampError,
    },
    #[error("segment {index}: end {end} is earlier than start {start}")]
    NegativeDuration { index: usize, start: f64, end: f64 },
    #[error("failed to serialize transcript: {0}")]
    Serialize(#[from] serde_json::Error),
}
