use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod card;

#[derive(Debug, Parser)]
#[command(name = "swatch-cli")]
#[command(about = "Inspect variant availability for a product card")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Evaluate a product document saved on disk
    Inspect {
        /// Path to a product JSON document (`.js` or `.json` shape)
        #[arg(long)]
        file: PathBuf,

        /// Selection to apply, as `axis=value` (repeatable)
        #[arg(long = "select", value_parser = parse_select)]
        selections: Vec<(String, String)>,
    },
    /// Fetch a product from a storefront and evaluate it
    Fetch {
        /// Product handle, e.g. `linen-shirt`
        #[arg(long)]
        handle: String,

        /// Storefront URL; defaults to `SWATCH_STOREFRONT_URL`
        #[arg(long)]
        shop: Option<String>,

        /// Selection to apply, as `axis=value` (repeatable)
        #[arg(long = "select", value_parser = parse_select)]
        selections: Vec<(String, String)>,
    },
}

/// Parses an `axis=value` pair. The value may be empty, which clears the axis.
fn parse_select(raw: &str) -> Result<(String, String), String> {
    let (axis, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected axis=value, got '{raw}'"))?;
    let axis = axis.trim();
    if axis.is_empty() {
        return Err(format!("missing axis name in '{raw}'"));
    }
    Ok((axis.to_owned(), value.trim().to_owned()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = swatch_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Inspect { file, selections }) => {
            card::run_inspect(&config, &file, &selections)?;
        }
        Some(Commands::Fetch {
            handle,
            shop,
            selections,
        }) => {
            card::run_fetch(&config, &handle, shop.as_deref(), &selections).await?;
        }
        None => println!("swatch-cli: use `inspect` or `fetch` (see --help)"),
    }

    Ok(())
}
