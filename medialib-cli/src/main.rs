//! MediaLib command-line driver.
//!
//! Usage:
//!   medialib validate --config site.toml
//!   medialib tabs --config site.toml
//!   medialib insert --config site.toml --item <uuid> --align left

use std::path::PathBuf;
use std::process::ExitCode;
use anyhow::Result;
use clap::{Parser, Subcommand};
use medialib_cli::SiteConfig;
use medialib_types::{Alignment, ItemId, ViewModeId};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "medialib")]
#[command(about = "Embed catalog media into rich-text documents")]
struct Args {
    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the editor can run on its text format
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Show what the media library displays when opened
    Tabs {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Insert a catalog item and print the resulting source
    Insert {
        #[arg(short, long)]
        config: PathBuf,

        /// Catalog item UUID
        #[arg(long)]
        item: ItemId,

        /// left, center, right or none
        #[arg(long)]
        align: Option<Alignment>,

        #[arg(long)]
        view_mode: Option<ViewModeId>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    match args.command {
        Command::Validate { config } => {
            let config = SiteConfig::load(&config)?;
            let violations = medialib_cli::validate(&config);
            if violations.is_empty() {
                info!(format = %config.format.id, "Editor configuration is valid");
                return Ok(ExitCode::SUCCESS);
            }
            for violation in &violations {
                println!("{violation}");
            }
            warn!(count = violations.len(), "Editor configuration is invalid");
            Ok(ExitCode::FAILURE)
        }
        Command::Tabs { config } => {
            let config = SiteConfig::load(&config)?;
            print!("{}", medialib_cli::tabs(&config).await?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Insert {
            config,
            item,
            align,
            view_mode,
        } => {
            let config = SiteConfig::load(&config)?;
            println!(
                "{}",
                medialib_cli::insert(&config, item, align, view_mode).await?
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}
