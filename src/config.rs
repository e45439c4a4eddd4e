use std::path::PathBuf;

/// Settings for a local five-format export.
#[derive(Debug)]
pub struct ExportConfig {
    pub transcript_file: PathBuf,
    pub output_dir: PathBuf,
    pub base_name: Option<String>,
    pub timestamp_dir: bool,
}

/// Settings for client mode against a running conversion server.
#[derive(Debug)]
pub struct ClientConfig {
    pub server_url: String,
    pub transcript_file: PathBuf,
    pub output_dir: PathBuf,
    pub base_name: Option<String>,
}

impl ClientConfig {
    pub fn new(
        server_url: String,
        transcript_file: PathBuf,
        output_dir: PathBuf,
        base_name: Option<String>,
    ) -> Self {
        Self {
            server_url,
            transcript_file,
            output_dir,
            base_name,
        }
    }
}
