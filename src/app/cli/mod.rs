//! CLI Adapter.

mod generate;
mod init;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{AppError, CachingStrategy};

#[derive(Parser)]
#[command(name = "pwagen")]
#[command(version)]
#[command(
    about = "Generate a web app manifest, offline page and service worker",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default pwa.toml
    #[clap(visible_alias = "i")]
    Init {
        /// Project directory (defaults to current directory)
        path: Option<PathBuf>,
    },
    /// Generate manifest.json, the offline page and service-worker.js
    #[clap(visible_alias = "s")]
    Setup {
        #[command(flatten)]
        args: generate::GenerateArgs,
    },
    /// Generate manifest.json
    #[clap(visible_alias = "m")]
    Manifest {
        #[command(flatten)]
        args: generate::GenerateArgs,
    },
    /// Generate the offline fallback page
    #[clap(visible_alias = "o")]
    OfflinePage {
        #[command(flatten)]
        args: generate::GenerateArgs,
    },
    /// Generate service-worker.js
    #[clap(visible_alias = "sw")]
    ServiceWorker {
        #[command(flatten)]
        args: generate::GenerateArgs,
    },
    /// List supported caching strategies
    Strategies,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Init { path } => init::run_init(path),
        Commands::Setup { args } => generate::run_setup(args),
        Commands::Manifest { args } => generate::run_manifest(args),
        Commands::OfflinePage { args } => generate::run_offline_page(args),
        Commands::ServiceWorker { args } => generate::run_service_worker(args),
        Commands::Strategies => {
            run_strategies();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_strategies() {
    println!("Available caching strategies:");
    for strategy in CachingStrategy::ALL {
        println!("  {} - {}", strategy.label(), strategy.summary());
    }
}
