//! Route registry maintenance

use crate::domain::{RouteInfo, RouteRegistry};
use crate::error::{ClimbError, Result};
use crate::infrastructure::{ClimbRepository, FileSystemRepository};

/// A ranked candidate, detached from the registry it came from
#[derive(Debug, Clone, PartialEq)]
pub struct RouteCandidate {
    pub route: RouteInfo,
    pub alias: String,
    pub score: f64,
    /// Whether the score clears the configured threshold
    pub accepted: bool,
}

pub struct RouteService {
    repository: FileSystemRepository,
}

impl RouteService {
    pub fn new(repository: FileSystemRepository) -> Self {
        RouteService { repository }
    }

    fn load(&self) -> Result<RouteRegistry> {
        let config = self.repository.load_config()?;
        let mut routes = self.repository.load_routes()?;
        routes.set_threshold(config.match_threshold);
        Ok(routes)
    }

    /// Register a new route with optional extra aliases
    pub fn add(&self, name: &str, grade: &str, aliases: &[String]) -> Result<RouteInfo> {
        let mut routes = self.load()?;
        let route = RouteInfo::new(name.trim(), grade.trim(), aliases.to_vec());
        routes.add_route(route.clone())?;
        self.repository.save_routes(&routes)?;
        Ok(route)
    }

    /// Teach the registry another spelling of a route
    pub fn alias(&self, name: &str, alias: &str) -> Result<RouteInfo> {
        let mut routes = self.load()?;
        routes.add_alias(name, alias)?;
        self.repository.save_routes(&routes)?;

        routes
            .get(name)
            .cloned()
            .ok_or_else(|| ClimbError::RouteNotFound(name.to_string()))
    }

    /// Best candidates for an approximate name
    pub fn find(&self, approx: &str, limit: usize) -> Result<Vec<RouteCandidate>> {
        let routes = self.load()?;
        let threshold = routes.threshold();

        Ok(routes
            .lookup_fuzzy(approx)
            .into_iter()
            .take(limit)
            .map(|m| RouteCandidate {
                route: m.route.clone(),
                alias: m.alias.to_string(),
                score: m.score,
                accepted: m.score >= threshold,
            })
            .collect())
    }

    /// All routes, by name
    pub fn list(&self) -> Result<Vec<RouteInfo>> {
        Ok(self.load()?.iter().cloned().collect())
    }
}
