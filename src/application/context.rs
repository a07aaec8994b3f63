//! Configuration and registries loaded together for parsing

use crate::domain::{ClimberRegistry, RouteRegistry};
use crate::error::Result;
use crate::infrastructure::{ClimbRepository, Config};

/// Everything a parse needs from the repository
#[derive(Debug, Clone)]
pub struct ParsingContext {
    pub config: Config,
    pub routes: RouteRegistry,
    pub climbers: ClimberRegistry,
}

impl ParsingContext {
    /// Load config and registries; the route threshold comes from the config.
    pub fn load(repository: &impl ClimbRepository) -> Result<Self> {
        let config = repository.load_config()?;
        let mut routes = repository.load_routes()?;
        routes.set_threshold(config.match_threshold);
        let climbers = config.climber_registry();

        Ok(ParsingContext {
            config,
            routes,
            climbers,
        })
    }

    /// Defaults used outside of a log directory: seeded routes, default climbers
    pub fn standalone() -> Self {
        let config = Config::new();
        let climbers = config.climber_registry();
        ParsingContext {
            config,
            routes: RouteRegistry::seeded(),
            climbers,
        }
    }

    /// The day's roster: explicit codes win, then the header, then everyone.
    pub fn roster(&self, explicit: &[String], header: &str) -> Vec<String> {
        if !explicit.is_empty() {
            return explicit
                .iter()
                .map(|c| {
                    self.climbers
                        .recognize(c)
                        .map(str::to_string)
                        .unwrap_or_else(|| c.trim().to_string())
                })
                .collect();
        }

        let from_header = self.climbers.roster_from_header(header);
        if !from_header.is_empty() {
            return from_header;
        }

        self.climbers.codes().map(str::to_string).collect()
    }
}
