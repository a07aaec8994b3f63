//! Human corrections to a parsed entry

use crate::domain::route::RouteInfo;
use crate::error::{ClimbError, Result};

/// Most attempts accepted in one correction
const MAX_ATTEMPTS: usize = 20;

/// A change a person makes to a proposed entry
#[derive(Debug, Clone, PartialEq)]
pub enum Correction {
    /// Use this route instead of the guessed one
    SelectRoute(RouteInfo),
    /// Replace all of a climber's events with one event per hang flag
    ReplaceAttempts { climber: String, hangs: Vec<bool> },
    /// The fragment is not a climb (e.g. "rained out")
    NotAClimb,
}

/// Parse compact attempt notation into hang flags.
///
/// `"2hc"` is two attempts, the first hung and the second clean. The leading
/// count may be left out (`"hhc"`); `"0"` means no attempts.
pub fn parse_attempts(spec: &str) -> Result<Vec<bool>> {
    let spec = spec.trim().to_lowercase();
    let digits: String = spec.chars().take_while(|c| c.is_ascii_digit()).collect();
    let flags = &spec[digits.len()..];

    let hangs = flags
        .chars()
        .map(|c| match c {
            'h' => Ok(true),
            'c' => Ok(false),
            other => Err(ClimbError::InvalidCorrection(format!(
                "'{}' is not h (hang) or c (clean) in '{}'",
                other, spec
            ))),
        })
        .collect::<Result<Vec<bool>>>()?;

    if !digits.is_empty() {
        let reps: usize = digits
            .parse()
            .map_err(|_| ClimbError::InvalidCorrection(format!("Bad repetition count in '{}'", spec)))?;
        if reps != hangs.len() {
            return Err(ClimbError::InvalidCorrection(format!(
                "'{}' announces {} attempts but lists {}",
                spec,
                reps,
                hangs.len()
            )));
        }
    } else if hangs.is_empty() {
        return Err(ClimbError::InvalidCorrection("Empty attempt notation".to_string()));
    }

    if hangs.len() > MAX_ATTEMPTS {
        return Err(ClimbError::InvalidCorrection(format!(
            "At most {} attempts per correction",
            MAX_ATTEMPTS
        )));
    }

    Ok(hangs)
}
