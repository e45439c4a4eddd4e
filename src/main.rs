use anyhow::Result;
use clap::Parser;

use open_caption::cli::{Cli, Commands};
use open_caption::config::{ClientConfig, ExportConfig};
use open_caption::{client, export, formats, server};

#[actix_web::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            server::run_server(host, port).await?;
        }
        Commands::Convert { transcript, format } => {
            let result = export::load_transcript(&transcript).await?;
            let document = formats::render(&result, format)?;
            print!("{document}");
            if !document.ends_with('\n') {
                println!();
            }
        }
        Commands::Export {
            transcript,
            output_dir,
            base_name,
            timestamp_dir,
        } => {
            let config = ExportConfig {
                transcript_file: transcript,
                output_dir,
                base_name,
                timestamp_dir,
            };
            run_export(config).await?;
        }
        Commands::Upload {
            transcript,
            server_url,
            output_dir,
            base_name,
        } => {
            let config = ClientConfig::new(server_url, transcript, output_dir, base_name);
            client::run_client(config).await?;
        }
    }

    Ok(())
}

async fn run_export(config: ExportConfig) -> Result<()> {
    let result = export::load_transcript(&config.transcript_file).await?;

    let base_name = config
        .base_name
        .clone()
        .unwrap_or_else(|| export::base_name_for(&config.transcript_file));

    let dir = if config.timestamp_dir {
        export::timestamped_dir(&config.output_dir)
    } else {
        config.output_dir.clone()
    };

    let written = export::export_all(&result, &dir, &base_name).await?;

    println!("✅ Exported {} files to {}", written.len(), dir.display());
    for path in written {
        println!("   📝 {}", path.display());
    }

    Ok(())
}
