use anyhow::{Context, Result};
use clap::Parser;
use snip::{process_text, write_stats, RemovalConfig, SAMPLE_TEXT};
use std::path::PathBuf;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(name = "snip")]
#[command(about = "Remove the longest span between two letters from every sentence")]
#[command(version)]
struct Args {
    /// Text file to process (defaults to a built-in sample passage)
    input: Option<PathBuf>,

    /// Process this text instead of reading a file
    #[arg(long, conflicts_with = "input")]
    text: Option<String>,

    /// Letter opening the removed span
    #[arg(long)]
    start: Option<char>,

    /// Letter closing the removed span
    #[arg(long)]
    end: Option<char>,

    /// Compare letters case-sensitively
    #[arg(long)]
    case_sensitive: bool,

    /// JSON file with start_letter, end_letter and ignore_case
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the result here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Stats output file path
    #[arg(long)]
    stats_out: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(long)]
    quiet: bool,
}

impl Args {
    /// Defaults, then the config file, then explicit flags
    fn removal_config(&self) -> Result<RemovalConfig> {
        let mut config = match &self.config {
            Some(path) => RemovalConfig::load(path)?,
            None => RemovalConfig::default(),
        };
        if let Some(start) = self.start {
            config.start_letter = start;
        }
        if let Some(end) = self.end {
            config.end_letter = end;
        }
        if self.case_sensitive {
            config.ignore_case = false;
        }
        Ok(config)
    }

    async fn source_text(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        match &self.input {
            Some(path) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read input file: {}", path.display())),
            None => Ok(SAMPLE_TEXT.to_string()),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // WHY: structured JSON logging on stderr keeps stdout for the processed text
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(if args.quiet { Level::WARN } else { Level::INFO })
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!(?args, "Parsed CLI arguments");

    let config = args.removal_config()?;
    info!(?config, "Using removal config");

    let raw = args.source_text().await?;
    let processed = process_text(&raw, &config)?;

    info!(
        "Processed {} sentences, edited {}, removed {} letters",
        processed.stats.sentences, processed.stats.sentences_edited, processed.stats.letters_removed
    );

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, format!("{}\n", processed.output))
                .await
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            info!("Output written to: {}", path.display());
        }
        None => println!("{}", processed.output),
    }

    if let Some(path) = &args.stats_out {
        write_stats(path, &processed.stats).await?;
    }

    Ok(())
}
