//! CLI command handlers for `CoursePlanner`.
//!
//! Each command is implemented in its own submodule. Handlers report failures
//! on stderr with a `✗` prefix and exit non-zero.

pub mod available;
pub mod basics;
pub mod config;
pub mod explain;
pub mod graph;
pub mod import;
pub mod plan;
pub mod search;

use crate::args::ListingArgs;
use course_planner::config::Config;
use course_planner::models::{catalog_cache_path, Catalog};
use course_planner::planner::LevelFilter;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Where the catalog for this run comes from
#[derive(Debug, Clone, Copy)]
pub struct CatalogSource<'a> {
    /// Explicit catalog file from `--catalog`
    pub file: Option<&'a Path>,
}

impl CatalogSource<'_> {
    /// Resolve the catalog path: the explicit file, else the department cache
    #[must_use]
    pub fn path(&self, config: &Config) -> PathBuf {
        self.file.map_or_else(
            || catalog_cache_path(Path::new(&config.paths.catalog_dir), &config.planner.dept),
            Path::to_path_buf,
        )
    }

    /// Load the catalog for this run
    ///
    /// # Errors
    /// Returns a user-facing message if the catalog cannot be loaded
    pub fn load(&self, config: &Config) -> Result<Catalog, String> {
        let path = self.path(config);
        debug!("Loading catalog from {}", path.display());
        let catalog = Catalog::load_json(&path).map_err(|e| {
            if self.file.is_none() {
                format!(
                    "{e}\n  No cached catalog for {}; run `courseplanner import FILE --dept {}` or pass --catalog FILE",
                    config.planner.dept, config.planner.dept
                )
            } else {
                e.to_string()
            }
        })?;
        if catalog.is_empty() {
            tracing::warn!("Catalog {} has no courses", path.display());
        }
        Ok(catalog)
    }
}

/// Level filter and cap from flags, falling back to config
fn listing_options(listing: &ListingArgs, config: &Config) -> (LevelFilter, Option<usize>) {
    let filter = listing
        .levels
        .as_ref()
        .map_or_else(LevelFilter::all, |levels| LevelFilter::new(levels.iter().copied()));
    let max_results = match listing.max_results {
        Some(0) => None,
        Some(n) => Some(n),
        None => config.max_results(),
    };
    (filter, max_results)
}

/// Print a value as pretty JSON on stdout
fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| format!("Failed to serialize output: {e}"))?;
    println!("{json}");
    Ok(())
}

/// Report a failed command and exit
fn fail(command: &str, err: &str) -> ! {
    error!("{command} failed: {err}");
    eprintln!("✗ {err}");
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_path_resolution() {
        let mut config = Config::from_defaults();
        config.paths.catalog_dir = "/srv/catalogs".to_string();
        config.planner.dept = "CMPSC".to_string();

        let cached = CatalogSource { file: None }.path(&config);
        assert_eq!(cached, PathBuf::from("/srv/catalogs/cmpsc_catalog.json"));

        let explicit = CatalogSource {
            file: Some(Path::new("my.json")),
        }
        .path(&config);
        assert_eq!(explicit, PathBuf::from("my.json"));
    }

    #[test]
    fn test_listing_options() {
        let mut config = Config::from_defaults();
        config.planner.max_results = 5;

        let (filter, max) = listing_options(&ListingArgs::default(), &config);
        assert_eq!(filter, LevelFilter::all());
        assert_eq!(max, Some(5));

        let args = ListingArgs {
            levels: Some(vec![300]),
            max_results: Some(0),
        };
        let (filter, max) = listing_options(&args, &config);
        assert_eq!(filter.levels().collect::<Vec<_>>(), vec![300]);
        assert_eq!(max, None, "0 on the command line means unlimited");
    }

    #[test]
    fn test_load_missing_cache_mentions_import() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut config = Config::from_defaults();
        config.paths.catalog_dir = dir.path().to_string_lossy().to_string();
        config.planner.dept = "EE".to_string();

        let err = CatalogSource { file: None }.load(&config).unwrap_err();
        assert!(err.contains("courseplanner import"));
    }
}
