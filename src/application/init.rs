//! Initialize log use case

use crate::domain::RouteRegistry;
use crate::error::Result;
use crate::infrastructure::{ClimbRepository, Config, FileSystemRepository};
use std::fs;
use std::path::Path;

pub struct InitService;

impl InitService {
    /// Initialize a new climbing log at the specified path, optionally
    /// seeding the route registry with the built-in catalogue.
    pub fn execute(path: &Path, seed_routes: bool) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let repo = FileSystemRepository::new(path.to_path_buf());
        repo.initialize()?;

        let config = Config::new();
        repo.save_config(&config)?;

        let routes = if seed_routes {
            RouteRegistry::seeded()
        } else {
            RouteRegistry::default()
        };
        repo.save_routes(&routes)?;

        tracing::info!(path = %path.display(), routes = routes.len(), "initialized log");
        println!("Initialized climblog at {}", path.display());
        println!("Routes: {}", routes.len());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_everything() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("log");

        InitService::execute(&root, false).unwrap();

        let repo = FileSystemRepository::new(root.clone());
        assert!(repo.is_initialized());
        assert!(root.join(".climblog/config.toml").exists());
        assert!(repo.load_routes().unwrap().is_empty());
    }

    #[test]
    fn test_init_with_seed_routes() {
        let temp = TempDir::new().unwrap();
        InitService::execute(temp.path(), true).unwrap();

        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        let routes = repo.load_routes().unwrap();
        assert_eq!(routes.len(), RouteRegistry::seeded().len());
        assert!(routes.get("Centerpiece").is_some());
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        InitService::execute(temp.path(), false).unwrap();
        assert!(InitService::execute(temp.path(), false).is_err());
    }
}
