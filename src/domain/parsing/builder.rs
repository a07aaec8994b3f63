//! Building a climb entry from one fragment

use crate::domain::climber::ClimberRegistry;
use crate::domain::entry::{ClimbEntry, Resolution};
use crate::domain::parsing::segmenter::Fragment;
use crate::domain::parsing::tokenizer::tokenize_events;
use crate::domain::route::{RouteInfo, RouteRegistry};

/// Resolve a fragment's route and events into an entry.
///
/// Total: malformed fragments give an unresolved placeholder route and
/// keep their text in `comment`.
pub fn build_entry(
    fragment: &Fragment,
    routes: &RouteRegistry,
    climbers: &ClimberRegistry,
    roster: &[String],
) -> ClimbEntry {
    let (climb_info, resolution, match_score) = resolve_route(&fragment.name_approx, routes);
    let parse = tokenize_events(&fragment.remainder, roster, climbers);

    let comment = match (parse.comment.is_empty(), fragment.suffix.is_empty()) {
        (_, true) => parse.comment,
        (true, false) => fragment.suffix.clone(),
        (false, false) => format!("{} {}", parse.comment, fragment.suffix),
    };

    tracing::debug!(
        name_approx = %fragment.name_approx,
        route = %climb_info,
        ?resolution,
        score = match_score,
        events = parse.events.len(),
        "built entry"
    );

    ClimbEntry {
        name_approx: fragment.name_approx.clone(),
        comment,
        resolution,
        match_score,
        ambiguous: parse.ambiguous,
        idx_entry_start: fragment.start,
        idx_entry_end: fragment.end,
        source_text: fragment.text.clone(),
        climbers: roster.to_vec(),
        matched_tokens: parse.matched,
        climb_info,
        climb_events: parse.events,
    }
}

fn resolve_route(name_approx: &str, routes: &RouteRegistry) -> (RouteInfo, Resolution, f64) {
    if let Some(route) = routes.lookup_exact(name_approx) {
        return (route.clone(), Resolution::Exact, 1.0);
    }

    if let Some(best) = routes.best_match(name_approx) {
        return (best.route.clone(), Resolution::Fuzzy, best.score);
    }

    // Top score even when below the threshold
    let score = routes
        .lookup_fuzzy(name_approx)
        .first()
        .map_or(0.0, |m| m.score);
    (RouteInfo::unresolved(name_approx), Resolution::Unresolved, score)
}
