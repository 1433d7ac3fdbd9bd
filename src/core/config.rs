//! Configuration module for `CoursePlanner`

use crate::core::planner::{GraphOptions, DEFAULT_GRAPH_DEPTH, DEFAULT_GRAPH_MAX_NODES};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the config directory in string values
const DIR_VARIABLE: &str = "$COURSE_PLANNER";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default)]
    pub level: String,
    /// Log file path; empty logs to stderr
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding `<dept>_catalog.json` caches
    #[serde(default)]
    pub catalog_dir: String,
    /// Directory for graph exports
    #[serde(default)]
    pub out_dir: String,
}

/// Planner defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Department used when no catalog is named on the command line
    #[serde(default)]
    pub dept: String,
    /// Progression graph expansion rounds
    #[serde(default = "default_graph_depth")]
    pub graph_depth: usize,
    /// Progression graph node cap
    #[serde(default = "default_graph_max_nodes")]
    pub graph_max_nodes: usize,
    /// Cap on each eligible list; 0 means unlimited
    #[serde(default)]
    pub max_results: usize,
    /// Include the progression graph in plan output
    #[serde(default)]
    pub show_graph: bool,
}

const fn default_graph_depth() -> usize {
    DEFAULT_GRAPH_DEPTH
}

const fn default_graph_max_nodes() -> usize {
    DEFAULT_GRAPH_MAX_NODES
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            dept: String::new(),
            graph_depth: DEFAULT_GRAPH_DEPTH,
            graph_max_nodes: DEFAULT_GRAPH_MAX_NODES,
            max_results: 0,
            show_graph: false,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Planner settings
    #[serde(default)]
    pub planner: PlannerConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override catalog cache directory
    pub catalog_dir: Option<String>,
    /// Override export directory
    pub out_dir: Option<String>,
    /// Override default department
    pub dept: Option<String>,
}

impl Config {
    /// Get the `$COURSE_PLANNER` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/courseplanner`
    /// - macOS: `~/Library/Application Support/courseplanner`
    /// - Windows: `%APPDATA%\courseplanner`
    #[must_use]
    pub fn get_courseplanner_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("courseplanner")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty here and non-empty in `defaults` are
    /// filled; numeric planner fields already get their defaults from serde.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        let pairs = [
            (&mut self.logging.level, &defaults.logging.level),
            (&mut self.logging.file, &defaults.logging.file),
            (&mut self.paths.catalog_dir, &defaults.paths.catalog_dir),
            (&mut self.paths.out_dir, &defaults.paths.out_dir),
            (&mut self.planner.dept, &defaults.planner.dept),
        ];
        for (field, default) in pairs {
            if field.is_empty() && !default.is_empty() {
                field.clone_from(default);
                changed = true;
            }
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Command-line values replace file values for this run only; the
    /// configuration file is not touched.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(catalog_dir) = &overrides.catalog_dir {
            self.paths.catalog_dir.clone_from(catalog_dir);
        }
        if let Some(out_dir) = &overrides.out_dir {
            self.paths.out_dir.clone_from(out_dir);
        }
        if let Some(dept) = &overrides.dept {
            self.planner.dept.clone_from(dept);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_courseplanner_dir`](Self::get_courseplanner_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_courseplanner_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$COURSE_PLANNER` to the config directory
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_courseplanner_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults and `$COURSE_PLANNER` is
    /// expanded in path values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.catalog_dir = Self::expand_variables(&config.paths.catalog_dir);
        config.paths.out_dir = Self::expand_variables(&config.paths.out_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the compiled-in default configuration is invalid TOML.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create it from defaults on first run
    ///
    /// Fields added since the file was written are merged in from defaults and
    /// the file is rewritten. Any read or parse failure falls back to defaults.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the directory or file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `catalog_dir`, `out_dir`,
    /// `dept`, `graph_depth`, `graph_max_nodes`, `max_results`, `show_graph`.
    /// Underscores may be written as hyphens.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "catalog_dir" | "catalog-dir" => Some(self.paths.catalog_dir.clone()),
            "out_dir" | "out-dir" => Some(self.paths.out_dir.clone()),
            "dept" => Some(self.planner.dept.clone()),
            "graph_depth" | "graph-depth" => Some(self.planner.graph_depth.to_string()),
            "graph_max_nodes" | "graph-max-nodes" => Some(self.planner.graph_max_nodes.to_string()),
            "max_results" | "max-results" => Some(self.planner.max_results.to_string()),
            "show_graph" | "show-graph" => Some(self.planner.show_graph.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Note: This method updates the in-memory config. Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value cannot be parsed
    /// (e.g., "maybe" for a boolean, "-1" for a count)
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => self.logging.verbose = parse_bool(key, value)?,
            "catalog_dir" | "catalog-dir" => self.paths.catalog_dir = value.to_string(),
            "out_dir" | "out-dir" => self.paths.out_dir = value.to_string(),
            "dept" => self.planner.dept = value.trim().to_uppercase(),
            "graph_depth" | "graph-depth" => self.planner.graph_depth = parse_count(key, value)?,
            "graph_max_nodes" | "graph-max-nodes" => {
                self.planner.graph_max_nodes = parse_count(key, value)?;
            }
            "max_results" | "max-results" => self.planner.max_results = parse_count(key, value)?,
            "show_graph" | "show-graph" => self.planner.show_graph = parse_bool(key, value)?,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset it to its value in `defaults`)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "catalog_dir" | "catalog-dir" => {
                self.paths.catalog_dir.clone_from(&defaults.paths.catalog_dir);
            }
            "out_dir" | "out-dir" => self.paths.out_dir.clone_from(&defaults.paths.out_dir),
            "dept" => self.planner.dept.clone_from(&defaults.planner.dept),
            "graph_depth" | "graph-depth" => self.planner.graph_depth = defaults.planner.graph_depth,
            "graph_max_nodes" | "graph-max-nodes" => {
                self.planner.graph_max_nodes = defaults.planner.graph_max_nodes;
            }
            "max_results" | "max-results" => self.planner.max_results = defaults.planner.max_results,
            "show_graph" | "show-graph" => self.planner.show_graph = defaults.planner.show_graph,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds if there is no file.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    /// Graph bounds from the planner section
    #[must_use]
    pub const fn graph_options(&self) -> GraphOptions {
        GraphOptions {
            max_depth: self.planner.graph_depth,
            max_nodes: self.planner.graph_max_nodes,
        }
    }

    /// Eligible-list cap, `None` when unlimited
    #[must_use]
    pub const fn max_results(&self) -> Option<usize> {
        match self.planner.max_results {
            0 => None,
            n => Some(n),
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, String> {
    value
        .parse::<bool>()
        .map_err(|_| format!("Invalid boolean value for '{key}': '{value}'"))
}

fn parse_count(key: &str, value: &str) -> Result<usize, String> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("Invalid count for '{key}': '{value}'"))
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  catalog_dir = \"{}\"", self.paths.catalog_dir)?;
        writeln!(f, "  out_dir = \"{}\"", self.paths.out_dir)?;

        writeln!(f, "\n[planner]")?;
        writeln!(f, "  dept = \"{}\"", self.planner.dept)?;
        writeln!(f, "  graph_depth = {}", self.planner.graph_depth)?;
        writeln!(f, "  graph_max_nodes = {}", self.planner.graph_max_nodes)?;
        writeln!(f, "  max_results = {}", self.planner.max_results)?;
        writeln!(f, "  show_graph = {}", self.planner.show_graph)?;

        Ok(())
    }
}
