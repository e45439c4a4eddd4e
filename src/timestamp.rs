use crate::error::TimestampError;

/// Which fractional-seconds separator a subtitle format expects.
/// SRT uses a comma, WebVTT a period; the numeric logic is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampStyle {
    Srt,
    Vtt,
}

impl TimestampStyle {
    fn separator(self) -> char {
        match self {
            TimestampStyle::Srt => ',',
            TimestampStyle::Vtt => '.',
        }
    }
}

/// Format a seconds offset as `HH:MM:SS,mmm` (SRT) or `HH:MM:SS.mmm` (VTT).
///
/// Milliseconds are truncated, not rounded, so the integer-seconds field and
/// the millisecond field always agree (59.9995 renders as `00:00:59,999`,
/// never `00:01:00,000`).
pub fn format_timestamp(seconds: f64, style: TimestampStyle) -> Result<String, TimestampError> {
    if !seconds.is_finite() {
        return Err(TimestampError::NotFinite);
    }
    if seconds < 0.0 {
        return Err(TimestampError::Negative(seconds));
    }

    let hours = (seconds / 3600.0).floor() as u64;
    let minutes = ((seconds % 3600.0) / 60.0).floor() as u64;
    let whole_seconds = (seconds % 60.0).floor() as u64;
    let milliseconds = ((seconds % 1.0) * 1000.0).floor() as u64;

    Ok(format!(
        "{hours:02}:{minutes:02}:{whole_seconds:02}{}{milliseconds:03}",
        style.separator()
    ))
}

/// SRT-style timestamp (`HH:MM:SS,mmm`).
pub fn srt_timestamp(seconds: f64) -> Result<String, TimestampError> {
    format_timestamp(seconds, TimestampStyle::Srt)
}

/// VTT-style timestamp (`HH:MM:SS.mmm`).
pub fn vtt_timestamp(seconds: f64) -> Result<String, TimestampError> {
    format_timestamp(seconds, TimestampStyle::Vtt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(srt_timestamp(0.0).unwrap(), "00:00:00,000");
        assert_eq!(vtt_timestamp(0.0).unwrap(), "00:00:00.000");
    }

    #[test]
    fn test_hours_minutes_seconds_millis() {
        assert_eq!(srt_timestamp(3661.25).unwrap(), "01:01:01,250");
        assert_eq!(srt_timestamp(1.5).unwrap(), "00:00:01,500");
        assert_eq!(srt_timestamp(7322.0).unwrap(), "02:02:02,000");
    }

    #[test]
    fn test_millis_truncate_not_round() {
        // Rounding would carry into the minutes field and disagree with
        // the seconds component computed from the same input.
        assert_eq!(srt_timestamp(59.9995).unwrap(), "00:00:59,999");
        assert_eq!(vtt_timestamp(59.9995).unwrap(), "00:00:59.999");
    }

    #[test]
    fn test_output_shape() {
        for s in [0.0, 0.001, 59.999, 60.0, 3599.5, 86399.123] {
            let srt = srt_timestamp(s).unwrap();
            assert_eq!(srt.len(), 12);
            assert_eq!(&srt[2..3], ":");
            assert_eq!(&srt[5..6], ":");
            assert_eq!(&srt[8..9], ",");
            let vtt = vtt_timestamp(s).unwrap();
            assert_eq!(&vtt[8..9], ".");
            assert_eq!(&srt[..8], &vtt[..8]);
        }
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert_eq!(srt_timestamp(-0.5), Err(TimestampError::Negative(-0.5)));
        assert_eq!(srt_timestamp(f64::NAN), Err(TimestampError::NotFinite));
        assert_eq!(srt_timestamp(f64::INFINITY), Err(TimestampError::NotFinite));
    }
}
