//! A day of climbing: one row of the log

use crate::domain::correction::Correction;
use crate::domain::entry::{ClimbEntry, ClimbEvent};
use crate::error::{ClimbError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A day of climbing, keyed by date.
///
/// `log_text` and `place_and_climbers` are kept verbatim so every entry can
/// be traced back to the text it was parsed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimbingDay {
    pub date: NaiveDate,
    /// The log entry for the day, e.g. "Holderness, Idiot, White Rhino (TA, AS found new beta)"
    pub log_text: String,
    /// Place and climbers header, e.g. "Rumney TA AS w/ Art"
    pub place_and_climbers: String,
    #[serde(default)]
    pub climb_entries: Vec<ClimbEntry>,
}

impl ClimbingDay {
    /// Storage key: the ISO date
    pub fn key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// All events of the day, in entry order
    pub fn events(&self) -> impl Iterator<Item = &ClimbEvent> {
        self.climb_entries.iter().flat_map(|e| e.climb_events.iter())
    }

    /// Indices of entries a person should look at
    pub fn entries_needing_review(&self) -> Vec<usize> {
        self.climb_entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.needs_review())
            .map(|(i, _)| i)
            .collect()
    }

    /// Split the log text around one entry: (before, entry, after)
    pub fn entry_context(&self, idx: usize) -> Option<(&str, &str, &str)> {
        let entry = self.climb_entries.get(idx)?;
        let (start, end) = (entry.idx_entry_start, entry.idx_entry_end);
        if start > end || end > self.log_text.len() {
            return None;
        }
        Some((
            self.log_text.get(..start)?,
            self.log_text.get(start..end)?,
            self.log_text.get(end..)?,
        ))
    }

    /// Return a copy of the day with one entry corrected
    pub fn corrected(&self, idx: usize, correction: Correction) -> Result<ClimbingDay> {
        let entry = self.climb_entries.get(idx).ok_or_else(|| {
            ClimbError::InvalidCorrection(format!(
                "Entry {} does not exist ({} entries on {})",
                idx,
                self.climb_entries.len(),
                self.key()
            ))
        })?;

        let mut day = self.clone();
        day.climb_entries[idx] = entry.corrected(correction);
        Ok(day)
    }
}
