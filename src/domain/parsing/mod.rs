//! Log comment parsing
//!
//! raw comment → [`segment`] → per fragment: route lookup + [`tokenize_events`]
//! → [`build_entry`] → [`parse_day`].

pub mod builder;
pub mod segmenter;
pub mod tokenizer;

pub use builder::build_entry;
pub use segmenter::{segment, Fragment, Segmentation};
pub use tokenizer::{tokenize_events, EventParse};

use crate::domain::climber::ClimberRegistry;
use crate::domain::day::ClimbingDay;
use crate::domain::route::RouteRegistry;
use chrono::NaiveDate;

/// Parse one log row into a climbing day.
///
/// Pure and stateless: the registries are only read, and no state carries
/// over between rows. Never fails for any text.
pub fn parse_day(
    date: NaiveDate,
    place_and_climbers: &str,
    log_text: &str,
    default_climbers: &[String],
    routes: &RouteRegistry,
    climbers: &ClimberRegistry,
) -> ClimbingDay {
    let segmentation = segment(log_text);
    let climb_entries = segmentation
        .fragments
        .iter()
        .map(|fragment| build_entry(fragment, routes, climbers, default_climbers))
        .collect::<Vec<_>>();

    tracing::debug!(%date, entries = climb_entries.len(), "parsed day");

    ClimbingDay {
        date,
        log_text: log_text.to_string(),
        place_and_climbers: place_and_climbers.to_string(),
        climb_entries,
    }
}
