//! Show and list stored climbing days

use crate::domain::ClimbingDay;
use crate::error::{ClimbError, Result};
use crate::infrastructure::{ClimbRepository, FileSystemRepository};
use chrono::NaiveDate;

/// Options for listing days
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<usize>,
}

pub struct BrowseService {
    repository: FileSystemRepository,
}

impl BrowseService {
    pub fn new(repository: FileSystemRepository) -> Self {
        BrowseService { repository }
    }

    /// The stored day for a date
    pub fn show(&self, date: NaiveDate) -> Result<ClimbingDay> {
        self.repository
            .get_day(date)?
            .ok_or_else(|| ClimbError::DayNotFound(date.format("%Y-%m-%d").to_string()))
    }

    /// Stored days, newest first
    pub fn list(&self, options: &ListOptions) -> Result<Vec<ClimbingDay>> {
        if let (Some(from), Some(to)) = (options.from, options.to) {
            if from > to {
                return Err(ClimbError::InvalidDate(format!("--from {} is after --to {}", from, to)));
            }
        }

        let dates = self
            .repository
            .list_days(options.from, options.to, options.limit)?;

        let mut days = Vec::with_capacity(dates.len());
        for date in dates {
            if let Some(day) = self.repository.get_day(date)? {
                days.push(day);
            }
        }
        Ok(days)
    }
}
