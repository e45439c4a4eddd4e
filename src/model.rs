use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, TimestampError};

/// One recognized utterance. `start` and `end` are seconds from the
/// beginning of the audio; `text` may carry the recognizer's surrounding
/// whitespace, which the formatters trim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl Segment {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }
}

/// A complete recognition result: the ordered segments, their text joined
/// by newlines, and the detected (or requested) language. Segment order is
/// presentation order and is never changed after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionResult {
    pub text: String,
    pub segments: Vec<Segment>,
    pub language: String,
}

impl TranscriptionResult {
    /// Build a result from recognizer segments, deriving the full text
    /// as the newline-joined segment texts.
    pub fn from_segments(segments: Vec<Segment>, language: impl Into<String>) -> Self {
        let text = segments
            .iter()
            .map(|segment| segment.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        Self {
            text,
            segments,
            language: language.into(),
        }
    }
}

/// Check segment invariants where recognizer output enters the core:
/// finite, non-negative timestamps, and `end >= start`. Reports the
/// first offending segment by index and field.
pub fn validate_segments(segments: &[Segment]) -> Result<(), ConvertError> {
    for (index, segment) in segments.iter().enumerate() {
        for (field, value) in [("start", segment.start), ("end", segment.end)] {
            if !value.is_finite() {
                return Err(ConvertError::Timestamp {
                    index,
                    field,
                    source: TimestampError::NotFinite,
                });
            }
            if value < 0.0 {
                return Err(ConvertError::Timestamp {
                    index,
                    field,
                    source: TimestampError::Negative(value),
                });
            }
        }
        if segment.end < segment.start {
            return Err(ConvertError::NegativeDuration {
                index,
                start: segment.start,
                end: segment.end,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_segments_joins_text() {
        let result = TranscriptionResult::from_segments(
            vec![
                Segment::new(0.0, 1.5, "Hello"),
                Segment::new(1.5, 3.0, "World"),
            ],
            "en",
        );
        assert_eq!(result.text, "Hello\nWorld");
        assert_eq!(result.segments.len(), 2);
        assert_eq!(result.language, "en");
    }

    #[test]
    fn test_from_segments_empty() {
        let result = TranscriptionResult::from_segments(Vec::new(), "en");
        assert_eq!(result.text, "");
        assert!(result.segments.is_empty());
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        let segments = vec![
            Segment::new(0.0, 1.5, "a"),
            Segment::new(1.5, 1.5, "zero duration is fine"),
        ];
        assert!(validate_segments(&segments).is_ok());
    }

    #[test]
    fn test_validate_reports_index_and_field() {
        let segments = vec![
            Segment::new(0.0, 1.0, "ok"),
            Segment::new(-2.0, 1.0, "bad"),
        ];
        match validate_segments(&segments) {
            Err(ConvertError::Timestamp { index, field, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(field, "start");
            }
            other => panic!("expected timestamp error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_end_before_start() {
        let segments = vec![Segment::new(5.0, 2.0, "backwards")];
        match validate_segments(&segments) {
            Err(ConvertError::NegativeDuration { index, start, end }) => {
                assert_eq!(index, 0);
                assert_eq!(start, 5.0);
                assert_eq!(end, 2.0);
            }
            other => panic!("expected ordering error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let segments = vec![Segment::new(0.0, f64::NAN, "nan")];
        assert!(validate_segments(&segments).is_err());
    }
}
