//! CLI argument definitions for `CoursePlanner`

use clap::{builder::BoolishValueParser, Args, Parser, Subcommand, ValueEnum};
use course_planner::config::ConfigOverrides;
use course_planner::planner::parse_completed;
use course_planner::report::GraphFormat;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `tracing::Level`
/// for the subscriber.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
    /// Trace-level logging
    Trace,
}

impl From<LogLevelArg> for tracing::Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        write!(f, "{as_str}")
    }
}

/// Output format for listings
#[derive(Copy, Clone, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON on stdout
    Json,
}

/// Completed-course input shared by the planning subcommands
#[derive(Debug, Clone, Default, Args)]
pub struct CompletedArgs {
    /// Completed courses, comma-separated (repeatable), e.g. "CMPSC 131, MATH 140"
    #[arg(short, long = "completed", value_name = "LIST")]
    pub completed: Vec<String>,

    /// Read completed courses from a file (comma- or newline-separated)
    #[arg(long, value_name = "FILE")]
    pub completed_file: Option<PathBuf>,
}

impl CompletedArgs {
    /// Collect the completed set from flags and the optional file
    ///
    /// # Errors
    /// Returns an error if the completed file cannot be read
    pub fn to_set(&self) -> Result<HashSet<String>, String> {
        let mut completed: HashSet<String> = self.completed.iter().flat_map(|text| parse_completed(text)).collect();
        if let Some(path) = &self.completed_file {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("Failed to read completed list {}: {e}", path.display()))?;
            completed.extend(parse_completed(&text));
        }
        Ok(completed)
    }
}

/// Level filter and result cap for eligibility listings
#[derive(Debug, Clone, Default, Args)]
pub struct ListingArgs {
    /// Levels to list (100, 200, 300, 400; 400 includes higher); defaults to all
    #[arg(long, value_name = "LEVELS", value_delimiter = ',')]
    pub levels: Option<Vec<u32>>,

    /// Maximum courses per list (overrides config `max_results`; 0 = unlimited)
    #[arg(long, value_name = "N")]
    pub max_results: Option<usize>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `dept`, `catalog_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Store a catalog JSON file as the department's catalog cache.
    ///
    /// The file is normalized on the way in and written to
    /// `<catalog_dir>/<dept>_catalog.json`.
    Import {
        /// Catalog JSON file to import
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// List courses you can register for this term.
    Available {
        #[command(flatten)]
        completed: CompletedArgs,

        #[command(flatten)]
        listing: ListingArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// List courses with no prerequisites or concurrent requirements.
    Basics {
        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Explain why a course cannot be taken yet.
    Explain {
        /// Course code, e.g. "CMPSC 465"
        #[arg(value_name = "COURSE")]
        course: String,

        #[command(flatten)]
        completed: CompletedArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Build the progression graph around what you have completed.
    Graph {
        #[command(flatten)]
        completed: CompletedArgs,

        /// Expansion rounds (overrides config `graph_depth`)
        #[arg(long, value_name = "N")]
        depth: Option<usize>,

        /// Node cap (overrides config `graph_max_nodes`)
        #[arg(long, value_name = "N")]
        max_nodes: Option<usize>,

        /// Output format: text, json, mermaid (mmd), markdown (md)
        #[arg(short, long, value_name = "FORMAT", default_value = "text")]
        format: GraphFormat,

        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "FILE", conflicts_with = "save")]
        output: Option<PathBuf>,

        /// Write to `<out_dir>/<dept>_graph.<ext>` instead of stdout
        #[arg(long)]
        save: bool,
    },
    /// Look up courses by code, number, or title.
    Search {
        /// Query: a course code, a bare three-digit number, or title text
        #[arg(value_name = "QUERY")]
        query: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Run a full planning request (eligibility, search, why-not, graph).
    Plan {
        #[command(flatten)]
        completed: CompletedArgs,

        #[command(flatten)]
        listing: ListingArgs,

        /// Also search the catalog
        #[arg(long, value_name = "QUERY")]
        search: Option<String>,

        /// Also explain one course
        #[arg(long, value_name = "COURSE")]
        why_not: Option<String>,

        /// Include the progression graph (also enabled by config `show_graph`)
        #[arg(long)]
        graph: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "courseplanner",
    about = "Course eligibility planner command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level. Falls back to config if omitted.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Enable debug-level logging (shorthand)
    #[arg(long = "debug", global = true)]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Catalog JSON file to plan against (instead of the department cache)
    #[arg(long, value_name = "FILE", global = true)]
    pub catalog: Option<PathBuf>,

    /// Department whose cached catalog to use (overrides config `dept`)
    #[arg(long, value_name = "DEPT", global = true)]
    pub dept: Option<String>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config catalog cache directory
    #[arg(long = "catalog-dir", value_name = "DIR", global = true)]
    pub catalog_dir: Option<PathBuf>,

    /// Override config output directory
    #[arg(long = "out-dir", value_name = "DIR", global = true)]
    pub out_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// The result is applied to the loaded configuration for this run only.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            catalog_dir: self
                .catalog_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            out_dir: self
                .out_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            dept: self.dept.as_ref().map(|d| d.trim().to_uppercase()),
        }
    }
}
