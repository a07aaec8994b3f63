//! Apply a human correction to a stored entry

use crate::application::ParsingContext;
use crate::domain::{parse_attempts, ClimbEntry, Correction};
use crate::error::{ClimbError, Result};
use crate::infrastructure::{ClimbRepository, FileSystemRepository};
use chrono::NaiveDate;

/// A correction as requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorrectionRequest {
    /// Select a registered route by name or alias; optionally remember the
    /// entry's approximate name as a new alias
    Route { name: String, remember_alias: bool },
    /// `CLIMBER=SPEC`, e.g. `AS=2hc`
    Attempts(String),
    NotAClimb,
}

pub struct CorrectionService {
    repository: FileSystemRepository,
}

impl CorrectionService {
    pub fn new(repository: FileSystemRepository) -> Self {
        CorrectionService { repository }
    }

    /// Correct entry `index` of the day stored for `date` and store the result
    pub fn execute(
        &self,
        date: NaiveDate,
        index: usize,
        request: &CorrectionRequest,
    ) -> Result<ClimbEntry> {
        let day = self
            .repository
            .get_day(date)?
            .ok_or_else(|| ClimbError::DayNotFound(date.format("%Y-%m-%d").to_string()))?;
        let mut context = ParsingContext::load(&self.repository)?;

        let correction = match request {
            CorrectionRequest::Route {
                name,
                remember_alias,
            } => {
                let route = context
                    .routes
                    .get(name)
                    .or_else(|| context.routes.lookup_exact(name))
                    .cloned()
                    .ok_or_else(|| ClimbError::RouteNotFound(name.clone()))?;

                if *remember_alias {
                    if let Some(entry) = day.climb_entries.get(index) {
                        context.routes.add_alias(route.name(), &entry.name_approx)?;
                        self.repository.save_routes(&context.routes)?;
                    }
                }
                Correction::SelectRoute(route)
            }
            CorrectionRequest::Attempts(assignment) => {
                let (climber, spec) = assignment.split_once('=').ok_or_else(|| {
                    ClimbError::InvalidCorrection(format!(
                        "Expected CLIMBER=SPEC (e.g. AS=2hc), got '{}'",
                        assignment
                    ))
                })?;
                let climber = context
                    .climbers
                    .recognize(climber)
                    .ok_or_else(|| {
                        ClimbError::InvalidCorrection(format!("Unknown climber '{}'", climber.trim()))
                    })?
                    .to_string();
                Correction::ReplaceAttempts {
                    climber,
                    hangs: parse_attempts(spec)?,
                }
            }
            CorrectionRequest::NotAClimb => Correction::NotAClimb,
        };

        let corrected = day.corrected(index, correction)?;
        self.repository.put_day(&corrected)?;
        tracing::info!(date = %date, index, "corrected entry");

        Ok(corrected.climb_entries[index].clone())
    }
}
