//! Picstore CLI: run the upload pipeline on a local file.
//!
//! The upload directory must already exist; provisioning it is a
//! deployment step, not something this binary does.

use anyhow::Context;
use clap::{Parser, Subcommand};
use picstore_cli::init_tracing;
use picstore_core::{ErrorMetadata, UploadConfig};
use picstore_processing::process_upload;
use picstore_storage::ImageStore;

#[derive(Parser)]
#[command(name = "picstore", about = "Picstore upload processor CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate, normalize, and store an image file
    Process {
        /// Path to the image file to process
        file: std::path::PathBuf,
        /// Override the upload directory
        #[arg(long)]
        upload_dir: Option<std::path::PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Commands::Process { file, upload_dir } => {
            let mut config = UploadConfig::from_env()?;
            if let Some(dir) = upload_dir {
                config.upload_dir = dir;
            }

            let store = ImageStore::new(&config.upload_dir)?;

            let filename = file
                .file_name()
                .and_then(|n| n.to_str())
                .context("File path has no filename")?
                .to_string();
            let data = std::fs::read(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;

            match process_upload(data, &filename, &config, &store).await {
                Ok(stored) => {
                    println!("{}", stored);
                    Ok(())
                }
                Err(err) => Err(anyhow::anyhow!(
                    "{} ({})",
                    err.client_message(),
                    err.error_code()
                )),
            }
        }
    }
}
