use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yt_extract::config::{self, Config, API_KEY_VAR};
use yt_extract::output;
use yt_extract::utils::resolve_video_id;
use yt_extract::{Cli, ExtractionPipeline};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Merge .env first so RUST_LOG from the file reaches the filter below
    let env_file = config::load_env_file();

    // Initialize tracing; stdout is reserved for the report
    let default_filter = if cli.verbose {
        "yt_extract=debug"
    } else {
        "yt_extract=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    config::log_env_file(&env_file);

    // Only a missing API key can fail here
    let Ok(config) = Config::from_env() else {
        eprintln!("Error: {} not found in environment variables", API_KEY_VAR);
        eprintln!("Please set it in your .env file or environment");
        std::process::exit(1);
    };

    if let Err(e) = run(&cli, &config).await {
        eprintln!("Error processing video {}: {}", cli.video_id, e);
        std::process::exit(e.exit_code());
    }

    Ok(())
}

async fn run(cli: &Cli, config: &Config) -> yt_extract::Result<()> {
    let video_id = resolve_video_id(&cli.video_id);
    let pipeline = ExtractionPipeline::new(config)?;

    let progress = if cli.quiet {
        ProgressBar::hidden()
    } else {
        create_spinner(&format!("Extracting {}...", video_id))
    };

    let result = pipeline.run(&video_id, cli.mode()).await;
    progress.finish_and_clear();
    let content = result?.render();

    match &cli.output {
        Some(path) => {
            output::save_to_file(&content, path)?;
            println!("Output written to {}", path.display());
        }
        None => output::print_to_console(&content),
    }

    Ok(())
}

fn create_spinner(msg: &str) -> ProgressBar {
    let progress = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}") {
        progress.set_style(style);
    }
    progress.set_message(msg.to_string());
    progress.enable_steady_tick(Duration::from_millis(100));
    progress
}
