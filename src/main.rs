use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use imgid::format::ImageFormat;
use imgid::url::Folder;
use imgid::{config, id, record, url};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "imgid")]
#[command(about = "Compact image identifiers and CDN delivery URLs")]
#[command(long_about = "\
Compact image identifiers and CDN delivery URLs

An identifier packs an image's content hash, dominant color, aspect ratio,
and storage format into one string:

  5f2ab91c-darkred-150j
  └──────┘ └─────┘ └─┬┘└ format code ('j' = jpeg)
    hash     color   ratio token (150 ≈ 1.5, landscape)

'build' assembles a full image record (identifier, normalized host, expiry)
from raw metadata, 'url' derives a CDN delivery URL from an identifier, and
'inspect' decodes what the identifier still carries.

Run 'imgid gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Directory containing config.toml
    #[arg(long, default_value = ".", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Assemble an image record and print it as JSON
    Build(BuildArgs),
    /// Print the delivery URL for an identifier
    Url(UrlArgs),
    /// Decode the format, ratio token, and orientation of an identifier
    Inspect {
        /// Image identifier, e.g. 5f2ab91c-darkred-150j
        id: String,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

#[derive(clap::Args)]
struct BuildArgs {
    /// Content hash of the image bytes
    #[arg(long)]
    hash: String,
    /// Dominant color name
    #[arg(long)]
    color: String,
    #[arg(long)]
    width: u32,
    #[arg(long)]
    height: u32,
    /// Storage format: jpeg, png, webp, or gif
    #[arg(long)]
    format: ImageFormat,
    /// Byte length of the image payload
    #[arg(long)]
    length: u64,
    /// Origin host (normalized: www/m/mobi prefixes stripped)
    #[arg(long)]
    host: String,
    /// Ingestion instant as RFC 3339; defaults to now
    #[arg(long)]
    created_at: Option<DateTime<Utc>>,
}

#[derive(clap::Args)]
struct UrlArgs {
    /// Image identifier, e.g. 5f2ab91c-darkred-150j
    id: String,
    /// Size-class label, e.g. M or 2400
    #[arg(long)]
    size: String,
    /// Delivery folder: news or events
    #[arg(long)]
    folder: Folder,
    /// Override the format encoded in the identifier
    #[arg(long)]
    format: Option<ImageFormat>,
    /// Override the configured delivery host
    #[arg(long)]
    host: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build(args) => {
            let app_config = config::load_config(&cli.config)?;
            let params = record::BuildParams {
                hash: args.hash,
                color: args.color,
                width: args.width,
                height: args.height,
                format: args.format,
                length: args.length,
                host: args.host,
                created_at: args.created_at,
            };
            let image = record::build(&params, app_config.retention.days)?;
            println!("{}", serde_json::to_string_pretty(&image)?);
        }
        Command::Url(args) => {
            let app_config = config::load_config(&cli.config)?;
            let host = args.host.unwrap_or(app_config.delivery.host);
            let delivery = url::delivery_url(
                &args.id,
                &args.size,
                args.folder,
                args.format,
                Some(host.as_str()),
            )?;
            println!("{delivery}");
        }
        Command::Inspect { id } => {
            println!("format:      {}", id::decode_format(&id)?);
            println!("ratio token: {}", id::decode_ratio_token(&id)?);
            println!("orientation: {}", id::decode_orientation(&id)?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
