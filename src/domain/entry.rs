//! Climb entries and events

use crate::domain::correction::Correction;
use crate::domain::route::RouteInfo;
use serde::{Deserialize, Serialize};

/// One climber getting on a route once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClimbEvent {
    climber: String,
    hang: bool,
}

impl ClimbEvent {
    pub fn new(climber: impl Into<String>, hang: bool) -> Self {
        ClimbEvent {
            climber: climber.into(),
            hang,
        }
    }

    pub fn climber(&self) -> &str {
        &self.climber
    }

    /// True if the climber rested on the rope or fell
    pub fn hang(&self) -> bool {
        self.hang
    }
}

impl std::fmt::Display for ClimbEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.hang {
            write!(f, "{} (hang)", self.climber)
        } else {
            write!(f, "{}", self.climber)
        }
    }
}

/// How an entry's route was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// Name or alias matched exactly
    Exact,
    /// Best fuzzy match above the threshold
    Fuzzy,
    /// No confident match; the route is a placeholder
    Unresolved,
    /// Chosen by a person
    Manual,
    /// Marked as not being a climb at all
    Dismissed,
}

/// One route mention within a day's log.
///
/// For `"2 runs on Kundalini (so-so. linked to the top on lead)"`:
///
/// ```text
/// name_approx: "2 runs on Kundalini"
/// comment:     "so-so. linked to the top on"
/// ```
///
/// Scalar fields come before nested ones so the TOML form stays flat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimbEntry {
    /// Text used to look up the route, kept as written
    pub name_approx: String,
    /// Free text not consumed into events
    pub comment: String,
    pub resolution: Resolution,
    /// Similarity of the chosen route to `name_approx` (1.0 for exact)
    pub match_score: f64,
    /// True when part of the detail was kept verbatim for lack of a clear attribution
    #[serde(default)]
    pub ambiguous: bool,
    /// Byte offset in the day's log text where this entry starts
    pub idx_entry_start: usize,
    /// Byte offset one past the end of this entry
    pub idx_entry_end: usize,
    /// Verbatim fragment text
    pub source_text: String,
    /// Default roster for the day
    pub climbers: Vec<String>,
    /// Tokens consumed into `climb_events`
    #[serde(default)]
    pub matched_tokens: Vec<String>,
    pub climb_info: RouteInfo,
    #[serde(default)]
    pub climb_events: Vec<ClimbEvent>,
}

impl ClimbEntry {
    /// Events for one climber, in order
    pub fn events_for<'a>(&'a self, climber: &'a str) -> impl Iterator<Item = &'a ClimbEvent> {
        self.climb_events
            .iter()
            .filter(move |e| e.climber == climber)
    }

    /// Number of times a climber got on the route
    pub fn attempts(&self, climber: &str) -> usize {
        self.events_for(climber).count()
    }

    /// Number of hung attempts for a climber
    pub fn hangs(&self, climber: &str) -> usize {
        self.events_for(climber).filter(|e| e.hang).count()
    }

    /// Whether a person should look at this entry
    pub fn needs_review(&self) -> bool {
        self.ambiguous || matches!(self.resolution, Resolution::Fuzzy | Resolution::Unresolved)
    }

    /// Return a corrected copy of this entry
    pub fn corrected(&self, correction: Correction) -> ClimbEntry {
        let mut entry = self.clone();
        match correction {
            Correction::SelectRoute(route) => {
                entry.climb_info = route;
                entry.resolution = Resolution::Manual;
                entry.match_score = 1.0;
            }
            Correction::ReplaceAttempts { climber, hangs } => {
                entry.climb_events.retain(|e| e.climber != climber);
                entry
                    .climb_events
                    .extend(hangs.into_iter().map(|hang| ClimbEvent::new(climber.clone(), hang)));
                entry.ambiguous = false;
            }
            Correction::NotAClimb => {
                entry.climb_events.clear();
                entry.resolution = Resolution::Dismissed;
                entry.ambiguous = false;
            }
        }
        entry
    }
}

impl std::fmt::Display for ClimbEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let events: Vec<String> = self.climb_events.iter().map(|e| e.to_string()).collect();
        writeln!(f, "name_approx: {}", self.name_approx)?;
        writeln!(f, "comment: {}", self.comment)?;
        writeln!(f, "climb_info: {}", self.climb_info)?;
        write!(f, "climb_events: {}", events.join(" "))
    }
}
