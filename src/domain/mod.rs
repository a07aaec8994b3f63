//! Domain layer - Climbing log model and parsing

pub mod catalog;
pub mod climber;
pub mod correction;
pub mod day;
pub mod entry;
pub mod parsing;
pub mod route;

pub use climber::{Climber, ClimberRegistry};
pub use correction::{parse_attempts, Correction};
pub use day::ClimbingDay;
pub use entry::{ClimbEntry, ClimbEvent, Resolution};
pub use parsing::parse_day;
pub use route::{RouteInfo, RouteMatch, RouteRegistry, UNKNOWN_GRADE};
