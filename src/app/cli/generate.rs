//! Generator command implementations.

use std::path::PathBuf;

use clap::Args;

use crate::app::api::{self, GeneratedFile};
use crate::app::config::ConfigOverrides;
use crate::domain::{AppError, PwaConfig};

/// Options shared by the generator commands.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Config file (defaults to ./pwa.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Output directory for generated files
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// File name of the offline page
    #[arg(long)]
    offline_page_name: Option<String>,
    /// Application name
    #[arg(long)]
    name: Option<String>,
    /// Short application name
    #[arg(long)]
    short_name: Option<String>,
    /// Message shown on the offline page
    #[arg(long)]
    message: Option<String>,
    /// Insert the offline message as raw HTML
    #[arg(long)]
    raw_message: bool,
    /// Cache name used by the service worker
    #[arg(long)]
    cache_name: Option<String>,
    /// Caching strategy: cache-first, network-first or stale-while-revalidate
    #[arg(short, long)]
    strategy: Option<String>,
    /// Precached asset path (repeatable, replaces the configured list)
    #[arg(long = "asset", value_name = "PATH")]
    assets: Vec<String>,
}

impl GenerateArgs {
    fn load(self) -> Result<PwaConfig, AppError> {
        let overrides = ConfigOverrides {
            output_dir: self.out,
            offline_page_name: self.offline_page_name,
            name: self.name,
            short_name: self.short_name,
            message: self.message,
            raw_message: self.raw_message,
            cache_name: self.cache_name,
            caching_strategy: self.strategy,
            assets: self.assets,
        };
        api::load_config_at(std::env::current_dir()?, self.config.as_deref(), overrides)
    }
}

pub fn run_setup(args: GenerateArgs) -> Result<(), AppError> {
    let config = args.load()?;
    let outcome = api::setup(&config)?;
    for file in &outcome.files {
        report(file);
    }
    Ok(())
}

pub fn run_manifest(args: GenerateArgs) -> Result<(), AppError> {
    let config = args.load()?;
    let file =
        api::generate_manifest_at(std::env::current_dir()?, &config.output_dir, &config.manifest)?;
    report(&file);
    Ok(())
}

pub fn run_offline_page(args: GenerateArgs) -> Result<(), AppError> {
    let config = args.load()?;
    let file = api::create_offline_page_at(
        std::env::current_dir()?,
        &config.output_dir,
        &config.offline_page_name,
        &config.offline,
    )?;
    report(&file);
    Ok(())
}

pub fn run_service_worker(args: GenerateArgs) -> Result<(), AppError> {
    let config = args.load()?;
    let file = api::generate_service_worker_at(
        std::env::current_dir()?,
        &config.output_dir,
        &config.service_worker_config(),
    )?;
    report(&file);
    Ok(())
}

fn report(file: &GeneratedFile) {
    println!("✅ Generated {} at {}", file.file_name, file.path.display());
}
