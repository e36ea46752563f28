use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use atelier::images::ImageResolver;
use atelier::platform::{
    classify_quality, DeviceProfile, EffectiveType, HeadlessProbe, NetworkHints,
};
use atelier::rendering::Page;
use atelier::SiteConfig;

#[derive(Parser)]
#[command(name = "atelier", about = "Headless engine for the signature-jewelry site")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the landing page to HTML
    Render {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Resolve a logical asset name to its delivery URL
    Resolve {
        /// Asset name, e.g. hero-background.jpg
        asset: String,
    },
    /// Classify the image quality tier for a set of device/network signals
    Quality {
        /// User-agent string to classify; omit to simulate a non-browser context
        #[arg(long)]
        user_agent: Option<String>,
        /// Effective connection type: slow-2g, 2g, 3g or 4g
        #[arg(long)]
        effective_type: Option<String>,
        /// Data-saver mode is on
        #[arg(long)]
        save_data: bool,
        /// Reported device memory in GB
        #[arg(long)]
        device_memory: Option<f64>,
    },
    /// Upload images to the blob store and print the resulting URLs
    #[cfg(feature = "upload")]
    Upload {
        /// Files to upload
        files: Vec<PathBuf>,
        /// Upload handshake endpoint
        #[arg(long)]
        endpoint: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = SiteConfig::default();
    config.validate().context("invalid site configuration")?;

    match cli.command {
        Command::Render { output } => {
            let page = Page::new(config);
            let html = page.render(&HeadlessProbe::new());
            match output {
                Some(path) => {
                    fs::write(&path, html)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("wrote {}", path.display());
                }
                None => println!("{}", html),
            }
        }
        Command::Resolve { asset } => {
            let resolver = ImageResolver::from_config(&config);
            println!("{}", resolver.resolve(&asset));
        }
        Command::Quality {
            user_agent,
            effective_type,
            save_data,
            device_memory,
        } => {
            let profile = user_agent.map(|ua| {
                let mut p = DeviceProfile::modern(&ua);
                p.device_memory_gb = device_memory;
                p
            });
            let hints = effective_type.map(|t| NetworkHints {
                save_data,
                effective_type: EffectiveType::parse(&t),
            });
            let tier = classify_quality(profile.as_ref(), hints.as_ref());
            println!("{}", tier);
        }
        #[cfg(feature = "upload")]
        Command::Upload { files, endpoint } => {
            use std::time::Duration;

            use atelier::upload::BlobUploadClient;

            let resolver = ImageResolver::from_config(&config);
            let client = BlobUploadClient::new(&endpoint, resolver, Duration::from_secs(30))?;

            let mut batch = Vec::new();
            for path in &files {
                let bytes = fs::read(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                let name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("upload.bin")
                    .to_string();
                batch.push((name, guess_mime(path).to_string(), bytes));
            }

            let uploaded = client.upload_many(
                batch
                    .iter()
                    .map(|(name, mime, bytes)| (name.as_str(), mime.as_str(), bytes.clone())),
            );
            for image in &uploaded {
                println!("{} -> {}", image.blob_url, image.delivery_url);
            }
            if uploaded.len() != files.len() {
                eprintln!("{} of {} uploads failed", files.len() - uploaded.len(), files.len());
            }
        }
    }

    Ok(())
}

#[cfg(feature = "upload")]
fn guess_mime(path: &std::path::Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
