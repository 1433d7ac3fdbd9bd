//! Command-line interface entry point for `CoursePlanner`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use commands::graph::GraphRun;
use commands::plan::PlanQueries;
use commands::CatalogSource;
use course_planner::config::Config;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| parse_level(&config.logging.level))
        .unwrap_or(Level::WARN);
    if args.debug_flag {
        level = Level::DEBUG;
    }

    let verbose = args.verbose || config.logging.verbose;

    let config_log_path = (!config.logging.file.is_empty()).then(|| PathBuf::from(&config.logging.file));
    let log_path = args.log_file.clone().or(config_log_path);
    setup_logging(level, log_path.as_deref(), verbose);

    let source = CatalogSource {
        file: args.catalog.as_deref(),
    };

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Import { file } => commands::import::run(&file, &config),
        Command::Available {
            completed,
            listing,
            format,
        } => commands::available::run(source, &completed, &listing, format, &config, verbose),
        Command::Basics { format } => commands::basics::run(source, format, &config),
        Command::Explain {
            course,
            completed,
            format,
        } => commands::explain::run(source, &course, &completed, format, &config),
        Command::Graph {
            completed,
            depth,
            max_nodes,
            format,
            output,
            save,
        } => {
            let graph_run = GraphRun {
                depth,
                max_nodes,
                format,
                output,
                save,
            };
            commands::graph::run(source, &completed, &graph_run, &config);
        }
        Command::Search { query, format } => commands::search::run(source, &query, format, &config),
        Command::Plan {
            completed,
            listing,
            search,
            why_not,
            graph,
            format,
        } => {
            let queries = PlanQueries { search, why_not, graph };
            commands::plan::run(source, &completed, &listing, &queries, format, &config);
        }
    }
}

/// Install the tracing subscriber: stderr always, plus a plain-text file layer when a path is set
fn setup_logging(level: Level, log_path: Option<&Path>, verbose: bool) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .with_line_number(false);

    let log_file = log_path.and_then(|path| match open_log_file(path) {
        Ok(file) => Some(file),
        Err(err) => {
            eprintln!("✗ Failed to initialize file logging at {}: {err}", path.display());
            None
        }
    });
    let file_layer = log_file.map(|file| {
        tracing_subscriber::fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(path) = log_path.filter(|p| p.exists()) {
        if verbose {
            eprintln!("✓ File logging initialized at: {}", path.display());
        } else {
            info!("File logging initialized at: {}", path.display());
        }
    }
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn parse_level(s: &str) -> Option<Level> {
    match s.trim().to_ascii_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" | "warning" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}
