//! climblog - Structured climbing log
//!
//! Parses the free-form comments of a climbing log ("Armed, Centerpiece (AS
//! 2xlead 2h, TA redpoint)") into climbing days made of route entries and
//! per-climber climb events, resolving approximate route names against a
//! registry of known routes.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ClimbError;
