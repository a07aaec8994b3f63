//! File system repository
//!
//! Layout of a log directory:
//!
//! ```text
//! .climblog/config.toml    configuration
//! .climblog/routes.toml    route registry, keyed by canonical name
//! days/YYYY-MM-DD.toml     one parsed climbing day per file
//! ```
//!
//! There is no locking: a single writer at a time is assumed.

use crate::domain::{ClimbingDay, RouteInfo, RouteRegistry};
use crate::error::{ClimbError, Result};
use crate::infrastructure::Config;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const DAYS_DIR: &str = "days";

/// On-disk form of the route registry
#[derive(Debug, Default, Serialize, Deserialize)]
struct RoutesFile {
    #[serde(default)]
    routes: Vec<RouteInfo>,
}

/// Abstract repository for climbing log storage
pub trait ClimbRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .climblog/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .climblog/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .climblog directory exists
    fn is_initialized(&self) -> bool;

    /// Create .climblog directory structure
    fn initialize(&self) -> Result<()>;

    /// Load the route registry (empty if none was saved yet)
    fn load_routes(&self) -> Result<RouteRegistry>;

    /// Replace the stored route registry
    fn save_routes(&self, routes: &RouteRegistry) -> Result<()>;

    /// Get the stored day for a date
    fn get_day(&self, date: NaiveDate) -> Result<Option<ClimbingDay>>;

    /// Store a day under its date, replacing any previous version
    fn put_day(&self, day: &ClimbingDay) -> Result<()>;

    fn day_exists(&self, date: NaiveDate) -> bool;

    /// Stored dates, newest first, within an optional range
    fn list_days(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        limit: Option<usize>,
    ) -> Result<Vec<NaiveDate>>;
}

/// File system implementation of ClimbRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the log root by walking up from current directory
    /// First checks CLIMBLOG_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("CLIMBLOG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_climblog_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(ClimbError::Config(format!(
                    "CLIMBLOG_ROOT is set to '{}' but no .climblog directory found. \
                    Run 'climblog init' in that directory or unset CLIMBLOG_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the log root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_climblog_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(ClimbError::NotClimblogDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_climblog_dir(path: &Path) -> bool {
        path.join(".climblog").is_dir()
    }

    fn routes_path(&self) -> PathBuf {
        self.root.join(".climblog").join("routes.toml")
    }

    fn day_path(&self, date: NaiveDate) -> PathBuf {
        self.root
            .join(DAYS_DIR)
            .join(format!("{}.toml", date.format("%Y-%m-%d")))
    }

    /// Write a file using a best-effort atomic replace:
    /// write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    fn write_atomic(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.climblog-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("record.toml"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }

        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

impl ClimbRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_climblog_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let climblog_dir = self.root.join(".climblog");

        if climblog_dir.exists() {
            return Err(ClimbError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&climblog_dir)?;
        fs::create_dir_all(self.root.join(DAYS_DIR))?;
        Ok(())
    }

    fn load_routes(&self) -> Result<RouteRegistry> {
        let path = self.routes_path();
        if !path.exists() {
            return Ok(RouteRegistry::default());
        }

        let contents = fs::read_to_string(&path)?;
        let file: RoutesFile = toml::from_str(&contents)?;
        tracing::debug!(routes = file.routes.len(), "loaded route registry");
        Ok(RouteRegistry::from_routes(file.routes, RouteRegistry::default().threshold()))
    }

    fn save_routes(&self, routes: &RouteRegistry) -> Result<()> {
        let file = RoutesFile {
            routes: routes.iter().cloned().collect(),
        };
        let contents = toml::to_string_pretty(&file)?;
        Self::write_atomic(&self.routes_path(), &contents)
    }

    fn get_day(&self, date: NaiveDate) -> Result<Option<ClimbingDay>> {
        let path = self.day_path(date);
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)?;
        let day: ClimbingDay = toml::from_str(&contents)?;
        Ok(Some(day))
    }

    fn put_day(&self, day: &ClimbingDay) -> Result<()> {
        let contents = toml::to_string_pretty(day)?;
        Self::write_atomic(&self.day_path(day.date), &contents)
    }

    fn day_exists(&self, date: NaiveDate) -> bool {
        self.day_path(date).is_file()
    }

    fn list_days(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        limit: Option<usize>,
    ) -> Result<Vec<NaiveDate>> {
        let days_dir = self.root.join(DAYS_DIR);
        if !days_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut dates: Vec<NaiveDate> = WalkDir::new(&days_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?;
                let stem = name.strip_suffix(".toml")?;
                NaiveDate::parse_from_str(stem, "%Y-%m-%d").ok()
            })
            .collect();

        // Apply date range filters
        if let Some(from_date) = from {
            dates.retain(|d| *d >= from_date);
        }
        if let Some(to_date) = to {
            dates.retain(|d| *d <= to_date);
        }

        // Newest first
        dates.sort_by(|a, b| b.cmp(a));

        if let Some(n) = limit {
            dates.truncate(n);
        }

        Ok(dates)
    }
}
