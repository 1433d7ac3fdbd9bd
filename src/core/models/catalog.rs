//! Catalog model and JSON cache

use super::code::normalize_code;
use super::course::{Course, CourseRecord};
use crate::core::error::{PlannerError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A department catalog: one course record per normalized code
///
/// Courses are kept ordered by code so every walk over the catalog is
/// deterministic. A catalog is a read-only snapshot for the planning functions;
/// refresh by building a new one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    /// Courses indexed by normalized course code
    courses: BTreeMap<String, Course>,
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub const fn new() -> Self {
        Self {
            courses: BTreeMap::new(),
        }
    }

    /// Add a course to the catalog
    ///
    /// # Returns
    /// `true` if the course was added, `false` if it replaced a course with the
    /// same code or its code is blank (in which case nothing is stored)
    pub fn insert(&mut self, course: Course) -> bool {
        if course.code.is_empty() {
            return false;
        }
        self.courses.insert(course.code.clone(), course).is_none()
    }

    /// Look up a course by code; the query is normalized first
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Course> {
        self.courses
            .get(code)
            .or_else(|| self.courses.get(&normalize_code(code)))
    }

    /// Whether the catalog has a course with this code
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog has no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// All courses, ordered by code
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    /// All course codes, in order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.courses.keys().map(String::as_str)
    }

    /// Parse a catalog from the JSON cache format
    ///
    /// The cache is an object keyed by course code. A record without a code of
    /// its own takes the key; records whose code is still blank are skipped.
    ///
    /// # Errors
    /// Returns [`PlannerError::CatalogFormat`] if the JSON does not match the cache shape
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: BTreeMap<String, CourseRecord> = serde_json::from_str(json)?;

        let mut catalog = Self::new();
        for (key, mut record) in records {
            if record.code.trim().is_empty() {
                record.code = key;
            }
            let course = Course::from(record);
            let code = course.code.clone();
            if !catalog.insert(course) && !code.is_empty() {
                warn!("Duplicate catalog entry for {code}; keeping the last record");
            }
        }
        Ok(catalog)
    }

    /// Serialize the catalog to the JSON cache format (pretty-printed)
    ///
    /// # Errors
    /// Returns [`PlannerError::CatalogFormat`] if serialization fails
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.courses)?)
    }

    /// Load a catalog from a JSON cache file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid cache
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| PlannerError::CatalogIo {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&content)?;
        info!("Loaded {} courses from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Write the catalog to a JSON cache file, creating parent directories
    ///
    /// # Errors
    /// Returns an error if the directory or file cannot be written
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let io_err = |source| PlannerError::CatalogIo {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, self.to_json_string()?).map_err(io_err)?;
        debug!("Saved {} courses to {}", self.len(), path.display());
        Ok(())
    }
}

impl FromIterator<Course> for Catalog {
    fn from_iter<T: IntoIterator<Item = Course>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for course in iter {
            catalog.insert(course);
        }
        catalog
    }
}

/// Path of a department's catalog cache: `<dir>/<dept>_catalog.json`, department lowercased
#[must_use]
pub fn catalog_cache_path(dir: &Path, dept: &str) -> PathBuf {
    let dept = normalize_code(dept).replace(' ', "_").to_lowercase();
    dir.join(format!("{dept}_catalog.json"))
}
