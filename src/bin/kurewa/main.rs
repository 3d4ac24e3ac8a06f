use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use spdlog::{info, warn};

use kurewa::config::{find_config, read_config, Config};
use kurewa::logger::configure_logger;
use kurewa::site_builder::{current_year, SiteBuilder};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path
    #[arg(short, long)]
    config_path: Option<PathBuf>,

    /// Newest year listed in the archive. Defaults to the current year
    #[arg(short, long)]
    year: Option<i32>,

    /// Render from a saved archive index instead of reading the posts
    #[arg(short, long)]
    index: Option<PathBuf>,
}

fn open_config(cfg_path: Option<PathBuf>) -> Result<Config> {
    let config_path = match cfg_path.or_else(find_config) {
        Some(path) => path,
        None => return Err(anyhow!("Could not find the kurewa configuration. Please run kurewa --help")),
    };

    read_config(&config_path).with_context(|| format!("Reading config from {}", config_path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = open_config(args.config_path)?;

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    let year = args.year.unwrap_or_else(current_year);
    info!("Building archive of {} up to {}", config.site.site_url, year);

    let builder = SiteBuilder::new(config);
    let report = match args.index {
        Some(index) => builder.build_from_index(&index, year)?,
        None => builder.build(year)?,
    };

    info!("Done. {} posts indexed, {} listed, {} hidden", report.indexed, report.displayed, report.hidden);
    Ok(())
}
