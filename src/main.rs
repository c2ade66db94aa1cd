use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;
use twincdn::config::{CdnConfig, ConfigStore};
use twincdn::logging::mask_identifier;
use twincdn::transform::TransformOptions;
use twincdn::{build_src_set, resolve_media, resolve_optimized_media, MediaError};

/// Twincdn - image transformation URLs for a primary CDN with a storage-render backup
#[derive(Parser, Debug)]
#[command(name = "twincdn")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "twincdn.yaml")]
    config: PathBuf,

    /// Read configuration from TWINCDN_* environment variables instead of a file
    #[arg(long)]
    from_env: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the configuration and exit
    Check,

    /// Print primary and backup URLs for a path
    Resolve {
        path: String,

        #[command(flatten)]
        transform: TransformArgs,

        /// Also build a srcset over the default breakpoints
        #[arg(long)]
        srcset: bool,
    },

    /// Print a responsive srcset for a path
    Srcset {
        path: String,

        #[command(flatten)]
        transform: TransformArgs,

        /// Comma separated widths (default: 320,640,768,1024,1280,1536,1920)
        #[arg(long, value_delimiter = ',')]
        widths: Vec<u32>,
    },
}

#[derive(ClapArgs, Debug)]
struct TransformArgs {
    #[arg(long)]
    width: Option<f64>,
    #[arg(long)]
    height: Option<f64>,
    #[arg(long)]
    quality: Option<f64>,
    /// auto, webp, avif, jpg or png
    #[arg(long)]
    format: Option<String>,
    /// cover, contain or fill
    #[arg(long)]
    fit: Option<String>,
    /// auto, face, center, top, bottom, left or right
    #[arg(long)]
    focal: Option<String>,
    #[arg(long)]
    dpr: Option<f64>,
    #[arg(long)]
    blur: Option<f64>,
    #[arg(long)]
    sharpen: bool,
}

impl From<TransformArgs> for TransformOptions {
    fn from(args: TransformArgs) -> Self {
        TransformOptions {
            width: args.width,
            height: args.height,
            quality: args.quality,
            format: args.format,
            fit: args.fit,
            focal: args.focal,
            dpr: args.dpr,
            blur: args.blur,
            sharpen: args.sharpen.then_some(true),
        }
    }
}

fn main() {
    // Initialize logging subsystem
    twincdn::logging::init_subscriber().unwrap_or_else(|e| {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    });

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!(kind = e.kind(), error = %e, "Command failed");
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), MediaError> {
    let config = if args.from_env {
        CdnConfig::from_env()?
    } else {
        CdnConfig::from_file(&args.config)?
    };

    let source = if args.from_env { "env" } else { "file" };
    tracing::info!(
        source,
        provider_id = %mask_identifier(&config.provider_id),
        force_backup = config.force_backup,
        "Configuration loaded"
    );

    let store = ConfigStore::with_config(config)?;

    let output = match args.command {
        Command::Check => serde_json::json!({ "status": "ok" }),
        Command::Resolve {
            path,
            transform,
            srcset,
        } => {
            let options = TransformOptions::from(transform);
            let media = if srcset {
                resolve_optimized_media(&store, &path, &options)?
            } else {
                resolve_media(&store, &path, &options)?
            };
            serde_json::json!(media)
        }
        Command::Srcset {
            path,
            transform,
            widths,
        } => {
            let options = TransformOptions::from(transform);
            let widths = (!widths.is_empty()).then_some(widths.as_slice());
            let src_set = build_src_set(&store, &path, &options, widths)?;
            serde_json::json!({ "srcSet": src_set })
        }
    };

    println!("{}", output);
    Ok(())
}
