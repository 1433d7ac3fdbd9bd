//! Import command handler
//!
//! Loads a catalog JSON file, normalizes it, and stores it as the department's
//! catalog cache.

use super::fail;
use course_planner::config::Config;
use course_planner::models::{catalog_cache_path, Catalog};
use std::path::{Path, PathBuf};
use tracing::info;

/// Run the import command
pub fn run(file: &Path, config: &Config) {
    match import(file, config) {
        Ok((count, path)) => println!("✓ Imported {count} courses into {}", path.display()),
        Err(err) => fail("import", &err),
    }
}

/// Copy `file` into the cache for the configured department
fn import(file: &Path, config: &Config) -> Result<(usize, PathBuf), String> {
    if config.planner.dept.trim().is_empty() {
        return Err("No department set; pass --dept DEPT or run `courseplanner config set dept DEPT`".to_string());
    }

    let catalog = Catalog::load_json(file).map_err(|e| e.to_string())?;
    let target = catalog_cache_path(Path::new(&config.paths.catalog_dir), &config.planner.dept);
    catalog.save_json(&target).map_err(|e| e.to_string())?;

    info!(
        "Imported {} courses for {} into {}",
        catalog.len(),
        config.planner.dept,
        target.display()
    );
    Ok((catalog.len(), target))
}
