use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use launchpress::{blueprint::BlueprintBuilder, config::Config, harvest, sources};

/// Assemble a launch blueprint for the Butter lip balm brand from web sources.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Path to a YAML file containing a list of URLs to pull research from.
    #[arg(long, value_name = "FILE")]
    sources: PathBuf,

    /// Brand name used throughout the plan.
    #[arg(long, default_value = "Butter")]
    brand: String,

    /// Where to write the launch plan (Markdown).
    #[arg(long, value_name = "FILE", default_value = "butter_launch_plan.md")]
    output: PathBuf,

    /// Seconds to wait for each HTTP request.
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// How many ranked keywords to surface in the plan.
    #[arg(long, default_value_t = launchpress::keywords::DEFAULT_TOP_KEYWORDS)]
    top_keywords: usize,

    /// Enable debug logging for troubleshooting.
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::new(args.brand, args.timeout, args.top_keywords)?;

    let urls = sources::load(&args.sources)
        .with_context(|| format!("loading sources from {}", args.sources.display()))?;
    info!("loaded {} source urls", urls.len());

    let articles = harvest::collect(&urls, config.timeout()).await;
    info!("fetched {} of {} articles", articles.len(), urls.len());

    let plan = BlueprintBuilder::new(config.brand_name())
        .with_top_keywords(config.top_keywords())
        .build(&articles);

    tokio::fs::write(&args.output, &plan)
        .await
        .with_context(|| format!("writing launch plan to {}", args.output.display()))?;
    info!("launch plan written to {}", args.output.display());

    Ok(())
}
