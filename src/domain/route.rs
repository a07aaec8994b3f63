//! Route registry: canonical routes, aliases and fuzzy lookup

use crate::domain::catalog::RUMNEY_ROUTES;
use crate::error::{ClimbError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Grade given to placeholder routes that could not be resolved
pub const UNKNOWN_GRADE: &str = "?";

/// Default acceptance threshold for fuzzy matches (0.0 - 1.0)
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.6;

/// Shorter strings than this are only compared whole, never as a window
const MIN_PARTIAL_LEN: usize = 4;

/// Guidebook information about a route (not a specific ascent).
///
/// The canonical name is always the first alias unless it was registered
/// among other aliases explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RouteRecord")]
pub struct RouteInfo {
    name: String,
    grade: String,
    aliases: Vec<String>,
}

/// Raw shape of a stored route, normalised through `RouteInfo::new`
#[derive(Deserialize)]
struct RouteRecord {
    name: String,
    grade: String,
    #[serde(default)]
    aliases: Vec<String>,
}

impl From<RouteRecord> for RouteInfo {
    fn from(record: RouteRecord) -> Self {
        RouteInfo::new(record.name, record.grade, record.aliases)
    }
}

impl RouteInfo {
    /// Create a route. The name is added to the aliases if missing.
    pub fn new(name: impl Into<String>, grade: impl Into<String>, aliases: Vec<String>) -> Self {
        let name = name.into().trim().to_string();
        let mut unique: Vec<String> = Vec::with_capacity(aliases.len() + 1);
        for alias in aliases {
            let alias = alias.trim().to_string();
            if !alias.is_empty() && !unique.contains(&alias) {
                unique.push(alias);
            }
        }
        if !unique.contains(&name) {
            unique.insert(0, name.clone());
        }

        RouteInfo {
            name,
            grade: grade.into().trim().to_string(),
            aliases: unique,
        }
    }

    /// Placeholder for an approximate name with no confident match
    pub fn unresolved(name_approx: &str) -> Self {
        RouteInfo::new(name_approx, UNKNOWN_GRADE, Vec::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grade(&self) -> &str {
        &self.grade
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Add an alias, returning false if it was already known
    fn push_alias(&mut self, alias: &str) -> bool {
        let alias = alias.trim();
        if alias.is_empty() || self.aliases.iter().any(|a| a == alias) {
            return false;
        }
        self.aliases.push(alias.to_string());
        true
    }
}

impl std::fmt::Display for RouteInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.grade)
    }
}

/// One ranked candidate from a fuzzy lookup
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch<'a> {
    pub route: &'a RouteInfo,
    /// The alias that produced the best score
    pub alias: &'a str,
    pub score: f64,
}

/// Registry of known routes keyed by canonical name
#[derive(Debug, Clone)]
pub struct RouteRegistry {
    routes: BTreeMap<String, RouteInfo>,
    threshold: f64,
}

impl Default for RouteRegistry {
    fn default() -> Self {
        RouteRegistry::new(DEFAULT_MATCH_THRESHOLD)
    }
}

impl RouteRegistry {
    /// Create an empty registry with the given acceptance threshold
    pub fn new(threshold: f64) -> Self {
        RouteRegistry {
            routes: BTreeMap::new(),
            threshold,
        }
    }

    /// Build a registry from a stored snapshot.
    /// Later routes with the same canonical name replace earlier ones.
    pub fn from_routes(routes: impl IntoIterator<Item = RouteInfo>, threshold: f64) -> Self {
        let routes = routes
            .into_iter()
            .map(|route| (route.name.clone(), route))
            .collect();
        RouteRegistry { routes, threshold }
    }

    /// Registry pre-filled with the built-in route catalogue
    pub fn seeded() -> Self {
        let routes = RUMNEY_ROUTES.iter().map(|(aliases, grade)| {
            let aliases: Vec<String> = aliases.iter().map(|a| a.to_string()).collect();
            RouteInfo::new(aliases[0].clone(), *grade, aliases)
        });
        RouteRegistry::from_routes(routes, DEFAULT_MATCH_THRESHOLD)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = threshold;
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Routes in canonical-name order
    pub fn iter(&self) -> impl Iterator<Item = &RouteInfo> {
        self.routes.values()
    }

    /// Get a route by its exact canonical name
    pub fn get(&self, name: &str) -> Option<&RouteInfo> {
        self.routes.get(name)
    }

    /// Exact lookup: canonical name first, then any alias after normalisation
    pub fn lookup_exact(&self, name: &str) -> Option<&RouteInfo> {
        if let Some(route) = self.routes.get(name.trim()) {
            return Some(route);
        }

        let wanted = normalize_name(name);
        if wanted.is_empty() {
            return None;
        }
        self.routes
            .values()
            .find(|route| route.aliases.iter().any(|a| normalize_name(a) == wanted))
    }

    /// Score every route against an approximate name, best first.
    ///
    /// Each route appears once, with its best-scoring alias. Ties go to the
    /// longer alias (more specific), then to the canonical name.
    pub fn lookup_fuzzy(&self, approx: &str) -> Vec<RouteMatch<'_>> {
        let mut matches: Vec<RouteMatch<'_>> = Vec::new();

        for route in self.routes.values() {
            let best = route
                .aliases
                .iter()
                .map(|alias| (alias.as_str(), similarity(approx, alias)))
                .max_by(|a, b| {
                    a.1.partial_cmp(&b.1)
                        .unwrap_or(std::cmp::Ordering::Equal)
                        .then(a.0.len().cmp(&b.0.len()))
                });

            if let Some((alias, score)) = best {
                if score > 0.0 {
                    matches.push(RouteMatch {
                        route,
                        alias,
                        score,
                    });
                }
            }
        }

        matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(b.alias.len().cmp(&a.alias.len()))
                .then(a.route.name.cmp(&b.route.name))
        });

        matches
    }

    /// Best fuzzy match at or above the acceptance threshold
    pub fn best_match(&self, approx: &str) -> Option<RouteMatch<'_>> {
        self.lookup_fuzzy(approx)
            .into_iter()
            .next()
            .filter(|m| m.score >= self.threshold)
    }

    /// Register a new route
    pub fn add_route(&mut self, route: RouteInfo) -> Result<()> {
        if route.name.is_empty() {
            return Err(ClimbError::Config("Route name cannot be empty".to_string()));
        }
        if self.routes.contains_key(&route.name) {
            return Err(ClimbError::DuplicateRoute(route.name));
        }
        for alias in &route.aliases {
            self.check_alias_free(alias, &route.name)?;
        }

        tracing::info!(route = %route, "registered route");
        self.routes.insert(route.name.clone(), route);
        Ok(())
    }

    /// Append an alias to an existing route. Known aliases are a no-op.
    /// An alias that already names another route is rejected.
    pub fn add_alias(&mut self, route_name: &str, alias: &str) -> Result<()> {
        if !self.routes.contains_key(route_name) {
            return Err(ClimbError::RouteNotFound(route_name.to_string()));
        }
        self.check_alias_free(alias, route_name)?;

        let route = self
            .routes
            .get_mut(route_name)
            .ok_or_else(|| ClimbError::RouteNotFound(route_name.to_string()))?;
        if route.push_alias(alias) {
            tracing::info!(route = route_name, alias, "added alias");
        }
        Ok(())
    }
}

impl RouteRegistry {
    /// Fails when `alias` normalises to a name or alias of a route other than `owner`
    fn check_alias_free(&self, alias: &str, owner: &str) -> Result<()> {
        let wanted = normalize_name(alias);
        let taken_by = self.routes.values().find(|route| {
            route.name != owner && route.aliases.iter().any(|a| normalize_name(a) == wanted)
        });

        match taken_by {
            Some(other) => {
                tracing::warn!(alias, route = owner, taken_by = %other.name, "alias already in use");
                Err(ClimbError::DuplicateRoute(format!(
                    "{} (alias of {})",
                    alias.trim(),
                    other.name
                )))
            }
            None => Ok(()),
        }
    }
}

/// Lowercase, turn punctuation into spaces and collapse whitespace.
/// Apostrophes are dropped so "Sally's" and "Sallys" agree.
pub fn normalize_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| *c != '\'' && *c != '’')
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Similarity in 0.0 - 1.0 between an approximate name and an alias
pub fn similarity(approx: &str, alias: &str) -> f64 {
    let a = normalize_name(approx);
    let b = normalize_name(alias);

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let sorted = strsim::normalized_levenshtein(&sort_tokens(&a), &sort_tokens(&b));
    sorted.max(partial_similarity(&a, &b))
}

fn sort_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Best score of the shorter string against every same-length window of the
/// longer one, so "2 runs on kundalini" still finds "kundalini".
fn partial_similarity(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (short, long) = if a_chars.len() <= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };

    if short.len() < MIN_PARTIAL_LEN || short.len() == long.len() {
        return 0.0;
    }

    let short: String = short.into_iter().collect();
    long.windows(short.chars().count())
        .map(|window| {
            let window: String = window.iter().collect();
            strsim::normalized_levenshtein(&short, &window)
        })
        .fold(0.0, f64::max)
}
