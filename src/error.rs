//! Error types for climblog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the climblog application.
///
/// Parsing a log line never produces one of these; they come from the
/// repository, the row source, configuration and registry maintenance.
#[derive(Debug, Error)]
pub enum ClimbError {
    #[error("Not a climblog directory: {0}")]
    NotClimblogDirectory(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("No climbing day stored for {0}")]
    DayNotFound(String),

    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error("Route already registered: {0}")]
    DuplicateRoute(String),

    #[error("Invalid correction: {0}")]
    InvalidCorrection(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl ClimbError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ClimbError::NotClimblogDirectory(_) => 2,
            ClimbError::InvalidDate(_) => 3,
            ClimbError::DayNotFound(_) | ClimbError::RouteNotFound(_) => 4,
            ClimbError::InvalidCorrection(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ClimbError::NotClimblogDirectory(path) => {
                format!(
                    "Not a climblog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'climblog init' in this directory to create a new log\n\
                    • Navigate to an existing climblog directory\n\
                    • Set CLIMBLOG_ROOT environment variable to your log path",
                    path.display()
                )
            }
            ClimbError::InvalidDate(date) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Accepted formats:\n\
                    • ISO dates: YYYY-MM-DD (e.g., 2024-06-26)\n\
                    • Spreadsheet dates: M/D/YYYY (e.g., 6/26/2024)",
                    date
                )
            }
            ClimbError::DayNotFound(date) => {
                format!(
                    "No climbing day stored for {}\n\n\
                    Suggestions:\n\
                    • Use 'climblog list' to see stored days\n\
                    • Import the log first: climblog import <CSV> --date {}",
                    date,
                    date.get(..4).unwrap_or(date)
                )
            }
            ClimbError::RouteNotFound(name) => {
                format!(
                    "Route not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'climblog route find \"{}\"' to search by approximate name\n\
                    • Register it: climblog route add \"{}\" <GRADE>",
                    name, name, name
                )
            }
            ClimbError::InvalidCorrection(msg) => {
                format!(
                    "Invalid correction: {}\n\n\
                    Attempt notation: <reps><h|c per rep>, e.g. '2hc' = two tries, \
                    first hung, second clean\n\
                    Example: climblog correct 2024-06-26 0 --attempts AS=2hc",
                    msg
                )
            }
            ClimbError::Config(msg) => {
                if msg.contains("match_threshold") {
                    format!(
                        "{}\n\n\
                        The threshold is a similarity score between 0.0 and 1.0\n\
                        Example: climblog config match_threshold 0.6",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ClimbError
pub type Result<T> = std::result::Result<T, ClimbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_climblog_directory_suggestion() {
        let err = ClimbError::NotClimblogDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("climblog init"));
        assert!(msg.contains("CLIMBLOG_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_invalid_date_formats() {
        let err = ClimbError::InvalidDate("yesterday-ish".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("YYYY-MM-DD"));
        assert!(msg.contains("M/D/YYYY"));
    }

    #[test]
    fn test_day_not_found_suggests_import_year() {
        let err = ClimbError::DayNotFound("2024-06-26".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("climblog list"));
        assert!(msg.contains("--date 2024"));
    }

    #[test]
    fn test_route_not_found_suggestions() {
        let err = ClimbError::RouteNotFound("Kunda".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("route find \"Kunda\""));
        assert!(msg.contains("route add \"Kunda\""));
    }

    #[test]
    fn test_threshold_config_suggestion() {
        let err = ClimbError::Config("match_threshold must be within 0.0..=1.0".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("between 0.0 and 1.0"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ClimbError::NotClimblogDirectory(PathBuf::new()).exit_code(), 2);
        assert_eq!(ClimbError::InvalidDate(String::new()).exit_code(), 3);
        assert_eq!(ClimbError::DayNotFound(String::new()).exit_code(), 4);
        assert_eq!(ClimbError::RouteNotFound(String::new()).exit_code(), 4);
        assert_eq!(ClimbError::InvalidCorrection(String::new()).exit_code(), 5);
        assert_eq!(ClimbError::Config(String::new()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = ClimbError::DuplicateRoute("Centerpiece".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Route already registered: Centerpiece");
    }
}
