use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::formats::SubtitleFormat;

#[derive(Parser)]
#[command(
    name = "open-caption",
    about = "Open Caption - Transcript to Subtitle Conversion",
    long_about = "Converts speech-recognition output (timed transcript segments) into SRT, VTT, TSV, plain-text, and JSON subtitle files, locally or through a built-in HTTP service.",
    after_help = "EXAMPLES:\n    # Start the conversion server\n    open-caption serve\n\n    # Preview a transcript as SRT on stdout\n    open-caption convert talk.json --format srt\n\n    # Write all five formats next to each other\n    open-caption export talk.json --output-dir subs\n\n    # Export into a timestamped subfolder, with a custom base name\n    open-caption export talk.json --output-dir subs --timestamp-dir --base-name episode-01\n\n    # Use a running server instead of converting locally\n    open-caption upload talk.json --server-url http://my-server:8080 --output-dir subs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(name = "serve")]
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(long, default_value = "8080")]
        port: u16,
    },
    #[command(name = "convert")]
    Convert {
        transcript: PathBuf,

        #[arg(long, short = 'f', value_enum, default_value_t = SubtitleFormat::Srt)]
        format: SubtitleFormat,
    },
    #[command(name = "export")]
    Export {
        transcript: PathBuf,

        #[arg(long, short = 'o', default_value = ".")]
        output_dir: PathBuf,

        #[arg(long)]
        base_name: Option<String>,

        #[arg(long)]
        timestamp_dir: bool,
    },
    #[command(name = "upload")]
    Upload {
        transcript: PathBuf,

        #[arg(long, default_value = "http://localhost:8080")]
        server_url: String,

        #[arg(long, short = 'o', default_value = ".")]
        output_dir: PathBuf,

        #[arg(long)]
        base_name: Option<String>,
    },
}
