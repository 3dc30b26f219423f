// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, info};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::sync::Arc;

use crate::app_config::Config;
use crate::model::bart_server::BartServer;
use crate::summarize::{Summarizer, SummarizerOptions, SummaryLevel, SummaryStrategy};

mod app_config;
mod errors;
mod model;
mod summarize;
mod text_processor;

/// CLI Wrapper for SummaryLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliSummaryLevel {
    Abstract,
    Summary,
    Article,
}

impl From<CliSummaryLevel> for SummaryLevel {
    fn from(cli_level: CliSummaryLevel) -> Self {
        match cli_level {
            CliSummaryLevel::Abstract => SummaryLevel::Abstract,
            CliSummaryLevel::Summary => SummaryLevel::Summary,
            CliSummaryLevel::Article => SummaryLevel::Article,
        }
    }
}

/// Summarize long documents with a BART-style model server
#[derive(Parser, Debug)]
#[command(name = "gistq", version, about)]
struct CommandLineOptions {
    /// Input text file to summarize; reads stdin when omitted
    input: Option<PathBuf>,

    /// Summary length tier
    #[arg(short, long, value_enum, default_value = "summary")]
    level: CliSummaryLevel,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Model server endpoint, overriding the configuration file
    #[arg(long, env = "GISTQ_ENDPOINT")]
    endpoint: Option<String>,

    /// Print the coverage percentage alongside the summary
    #[arg(long)]
    coverage: bool,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn level_filter(level: app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

/// Read the document text from the input file or stdin
fn read_input(input: &Option<PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(endpoint) = &cli.endpoint {
        config.model.endpoint = endpoint.clone();
        config.validate()?;
    }
    log::set_max_level(level_filter(config.log_level));

    let model = BartServer::new(
        &config.model.endpoint,
        &config.model.checkpoint,
        config.model.timeout_secs,
    )?;
    debug!(
        "Using model server at {} with checkpoint {}",
        config.model.endpoint, config.model.checkpoint
    );

    let summarizer = Summarizer::with_options(
        Arc::new(model),
        SummarizerOptions::from(&config.summarizer),
    );
    summarizer
        .model()
        .test_connection()
        .await
        .context("Model server is not reachable")?;

    let text = read_input(&cli.input)?;
    let level = SummaryLevel::from(cli.level);
    info!("Generating {} level summary", level);

    let report = summarizer.summarize(&text, level).await?;
    if report.strategy == SummaryStrategy::MultiStage {
        debug!("Used multi-stage path with {} chunks", report.chunk_count);
    }

    println!("{}", report.summary);
    if cli.coverage {
        println!("Coverage: {:.1}%", report.coverage);
    }

    Ok(())
}
