use std::fmt;
use std::str::FromStr;

use crate::error::ConvertError;
use crate::model::{Segment, TranscriptionResult};
use crate::timestamp::{TimestampStyle, format_timestamp};

/// The output formats written by an export, in the order they are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SubtitleFormat {
    Srt,
    Vtt,
    Tsv,
    Txt,
    Json,
}

impl SubtitleFormat {
    pub const ALL: [SubtitleFormat; 5] = [
        SubtitleFormat::Srt,
        SubtitleFormat::Vtt,
        SubtitleFormat::Tsv,
        SubtitleFormat::Txt,
        SubtitleFormat::Json,
    ];

    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            SubtitleFormat::Srt => "srt",
            SubtitleFormat::Vtt => "vtt",
            SubtitleFormat::Tsv => "tsv",
            SubtitleFormat::Txt => "txt",
            SubtitleFormat::Json => "json",
        }
    }
}

impl fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for SubtitleFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "srt" => Ok(SubtitleFormat::Srt),
            "vtt" => Ok(SubtitleFormat::Vtt),
            "tsv" => Ok(SubtitleFormat::Tsv),
            "txt" => Ok(SubtitleFormat::Txt),
            "json" => Ok(SubtitleFormat::Json),
            other => Err(format!(
                "unknown format '{other}', expected one of: srt, vtt, tsv, txt, json"
            )),
        }
    }
}

/// Render one segment's cue times, attaching the segment index to any
/// timestamp error and rejecting cues that would end before they start.
fn cue_times(
    index: usize,
    segment: &Segment,
    style: TimestampStyle,
) -> Result<(String, String), ConvertError> {
    let start = format_timestamp(segment.start, style).map_err(|source| {
        ConvertError::Timestamp {
            index,
            field: "start",
            source,
        }
    })?;
    let end =
        format_timestamp(segment.end, style).map_err(|source| ConvertError::Timestamp {
            index,
            field: "end",
            source,
        })?;
    if segment.end < segment.start {
        return Err(ConvertError::NegativeDuration {
            index,
            start: segment.start,
            end: segment.end,
        });
    }
    Ok((start, end))
}

/// Convert segments to SubRip (.srt): numbered cues, comma timestamps,
/// blank line between cues, nothing trailing at end of document.
pub fn to_srt(segments: &[Segment]) -> Result<String, ConvertError> {
    let mut srt = String::new();
    for (i, segment) in segments.iter().enumerate() {
        let (start, end) = cue_times(i, segment, TimestampStyle::Srt)?;
        srt.push_str(&format!(
            "{}\n{start} --> {end}\n{}\n\n",
            i + 1,
            segment.text.trim()
        ));
    }
    Ok(srt.trim_end().to_string())
}

/// Convert segments to WebVTT (.vtt): `WEBVTT` header, unnumbered cues,
/// period timestamps. The blank line after the last cue is part of the
/// format's block separator and is kept.
pub fn to_vtt(segments: &[Segment]) -> Result<String, ConvertError> {
    let mut vtt = String::from("WEBVTT\n\n");
    for (i, segment) in segments.iter().enumerate() {
        let (start, end) = cue_times(i, segment, TimestampStyle::Vtt)?;
        vtt.push_str(&format!("{start} --> {end}\n{}\n\n", segment.text.trim()));
    }
    Ok(vtt)
}

/// Convert segments to tab-separated rows with raw decimal seconds.
pub fn to_tsv(segments: &[Segment]) -> String {
    let mut tsv = String::from("start\tend\ttext\n");
    for segment in segments {
        tsv.push_str(&format!(
            "{}\t{}\t{}\n",
            segment.start,
            segment.end,
            segment.text.trim()
        ));
    }
    tsv
}

/// The newline-joined transcript text, as stored on the result.
pub fn to_plain_text(result: &TranscriptionResult) -> String {
    result.text.clone()
}

/// Pretty-printed JSON of the full result. serde_json leaves non-ASCII
/// characters unescaped, which matters for CJK transcripts.
pub fn to_json(result: &TranscriptionResult) -> Result<String, ConvertError> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Render a result in one of the supported formats.
pub fn render(result: &TranscriptionResult, format: SubtitleFormat) -> Result<String, ConvertError> {
    match format {
        SubtitleFormat::Srt => to_srt(&result.segments),
        SubtitleFormat::Vtt => to_vtt(&result.segments),
        SubtitleFormat::Tsv => Ok(to_tsv(&result.segments)),
        SubtitleFormat::Txt => Ok(to_plain_text(result)),
        SubtitleFormat::Json => to_json(result),
    }
}
