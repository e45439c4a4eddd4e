use std::path::Path;

use anyhow::{Result, anyhow};

use crate::config::ClientConfig;
use crate::export::base_name_for;
use crate::formats::SubtitleFormat;

pub async fn check_server_health(server_url: &str) -> Result<()> {
    let client = reqwest::Client::new();

    println!("🔍 Checking server health at: {server_url}/api/v1/health");

    let response = client
        .get(format!("{server_url}/api/v1/health"))
        .send()
        .await
        .map_err(|e| anyhow!("Failed to connect to server: {}", e))?;

    if response.status().is_success() {
        println!("✅ Server is healthy");
        Ok(())
    } else {
        Err(anyhow!("Server health check failed: {}", response.status()))
    }
}

pub async fn send_convert_request(
    server_url: &str,
    transcript_data: Vec<u8>,
    transcript_name: String,
    format: SubtitleFormat,
) -> Result<String> {
    let client = reqwest::Client::new();

    let form = reqwest::multipart::Form::new()
        .part(
            "transcript",
            reqwest::multipart::Part::bytes(transcript_data).file_name(transcript_name),
        )
        .text("format", format.extension());

    let response = client
        .post(format!("{server_url}/api/v1/convert"))
        .multipart(form)
        .send()
        .await
        .map_err(|e| anyhow!("Failed to send request: {}", e))?;

    let status = response.status();
    let response_text = response
        .text()
        .await
        .map_err(|e| anyhow!("Failed to read response: {}", e))?;

    if !status.is_success() {
        return Err(anyhow!(
            "Server returned error {}: {}",
            status,
            response_text
        ));
    }

    Ok(response_text)
}

pub async fn run_client(config: ClientConfig) -> Result<()> {
    println!("🎬 Open Caption Client");
    println!("======================");

    if !Path::new(&config.transcript_file).exists() {
        return Err(anyhow!(
            "Transcript file not found: {}",
            config.transcript_file.display()
        ));
    }

    let transcript_data = std::fs::read(&config.transcript_file)
        .map_err(|e| anyhow!("Failed to read transcript file: {}", e))?;

    println!(
        "📁 Transcript: {} ({} bytes)",
        config.transcript_file.display(),
        transcript_data.len()
    );

    if let Err(e) = check_server_health(&config.server_url).await {
        eprintln!("❌ {e}");
        eprintln!("💡 Make sure the server is running: open-caption serve");
        return Err(e);
    }

    let base_name = config
        .base_name
        .clone()
        .unwrap_or_else(|| base_name_for(&config.transcript_file));

    tokio::fs::create_dir_all(&config.output_dir)
        .await
        .map_err(|e| anyhow!("Failed to create output directory: {}", e))?;

    println!(
        "🚀 Requesting conversions from: {}/api/v1/convert",
        config.server_url
    );

    let transcript_name = config
        .transcript_file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("transcript.json")
        .to_string();

    for format in SubtitleFormat::ALL {
        let document = send_convert_request(
            &config.server_url,
            transcript_data.clone(),
            transcript_name.clone(),
            format,
        )
        .await?;

        let path = config
            .output_dir
            .join(format!("{base_name}.{}", format.extension()));
        tokio::fs::write(&path, document)
            .await
            .map_err(|e| anyhow!("Failed to write {}: {}", path.display(), e))?;
        println!("   📝 {}", path.display());
    }

    println!("\n✅ Export completed: 5 files in {}", config.output_dir.display());

    Ok(())
}
