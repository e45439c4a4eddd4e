use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use log::{debug, info};

use crate::formats::{self, SubtitleFormat};
use crate::model::TranscriptionResult;

/// Read and parse a saved transcription result (whisper-style JSON).
pub async fn load_transcript(path: &Path) -> Result<TranscriptionResult> {
    let data = tokio::fs::read(path)
        .await
        .map_err(|e| anyhow!("Failed to read transcript file {}: {}", path.display(), e))?;
    let result: TranscriptionResult = serde_json::from_slice(&data)
        .map_err(|e| anyhow!("Failed to parse transcript JSON {}: {}", path.display(), e))?;
    debug!(
        "Loaded transcript: {} segments, language {}",
        result.segments.len(),
        result.language
    );
    Ok(result)
}

/// Base filename for export files, derived from the source audio (or
/// transcript) filename without its extension.
pub fn base_name_for(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .unwrap_or("transcript")
        .to_string()
}

/// A `YYYYmmdd_HHMMSS` subdirectory of `root`, so repeated exports never
/// overwrite each other.
pub fn timestamped_dir(root: &Path) -> PathBuf {
    root.join(chrono::Local::now().format("%Y%m%d_%H%M%S").to_string())
}

/// Write all five formats with the same base name into `dir`. Every
/// document is rendered before anything is written; a bad segment aborts
/// the whole export rather than leaving a partial set of files behind.
pub async fn export_all(
    result: &TranscriptionResult,
    dir: &Path,
    base_name: &str,
) -> Result<Vec<PathBuf>> {
    let mut documents = Vec::with_capacity(SubtitleFormat::ALL.len());
    for format in SubtitleFormat::ALL {
        let content = formats::render(result, format)
            .with_context(|| format!("failed to render {format} output"))?;
        documents.push((format, content));
    }

    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let mut written = Vec::with_capacity(documents.len());
    for (format, content) in documents {
        let path = dir.join(format!("{base_name}.{}", format.extension()));
        tokio::fs::write(&path, content)
            .await
            .with_context(|| format!("failed to write {}", path.display()))?;
        debug!("Wrote {}", path.display());
        written.push(path);
    }

    info!(
        "Exported {} files to {} (base name: {base_name})",
        written.len(),
        dir.display()
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Segment;

    fn sample_result() -> TranscriptionResult {
        TranscriptionResult::from_segments(
            vec![
                Segment::new(0.0, 1.5, "Hello"),
                Segment::new(1.5, 3.0, "World"),
            ],
            "en",
        )
    }

    #[test]
    fn test_base_name_for() {
        assert_eq!(base_name_for(Path::new("/tmp/talk.mp3")), "talk");
        assert_eq!(base_name_for(Path::new("interview.v2.wav")), "interview.v2");
        assert_eq!(base_name_for(Path::new("")), "transcript");
    }

    #[test]
    fn test_timestamped_dir_shape() {
        let dir = timestamped_dir(Path::new("/tmp/out"));
        let name = dir.file_name().unwrap().to_str().unwrap();
        assert_eq!(name.len(), 15);
        assert_eq!(&name[8..9], "_");
        assert!(name.replace('_', "").chars().all(|c| c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn test_export_writes_all_five_formats() {
        let tmp = tempfile::tempdir().unwrap();
        let written = export_all(&sample_result(), tmp.path(), "talk")
            .await
            .unwrap();
        assert_eq!(written.len(), 5);

        for ext in ["srt", "vtt", "tsv", "txt", "json"] {
            let path = tmp.path().join(format!("talk.{ext}"));
            assert!(path.exists(), "missing {ext} output");
        }

        let srt = std::fs::read_to_string(tmp.path().join("talk.srt")).unwrap();
        assert!(srt.starts_with("1\n00:00:00,000 --> 00:00:01,500"));
        let vtt = std::fs::read_to_string(tmp.path().join("talk.vtt")).unwrap();
        assert!(vtt.starts_with("WEBVTT\n\n"));
        let txt = std::fs::read_to_string(tmp.path().join("talk.txt")).unwrap();
        assert_eq!(txt, "Hello\nWorld");
    }

    #[tokio::test]
    async fn test_export_is_all_or_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("export");
        let bad = TranscriptionResult::from_segments(
            vec![Segment::new(2.0, 1.0, "backwards")],
            "en",
        );
        assert!(export_all(&bad, &out, "talk").await.is_err());
        // Rendering failed before any file was written.
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn test_load_transcript_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("talk.json");
        let result = sample_result();
        std::fs::write(&path, serde_json::to_string_pretty(&result).unwrap()).unwrap();
        let loaded = load_transcript(&path).await.unwrap();
        assert_eq!(loaded, result);
    }

    #[tokio::test]
    async fn test_load_transcript_rejects_bad_json() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bad.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(load_transcript(&path).await.is_err());
    }
}
