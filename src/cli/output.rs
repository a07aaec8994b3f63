//! Output formatting utilities

use crate::application::{ImportSummary, RouteCandidate};
use crate::domain::{ClimbEntry, ClimbingDay, Resolution, RouteInfo};
use crate::infrastructure::Config;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn resolution_label(entry: &ClimbEntry) -> String {
    match entry.resolution {
        Resolution::Exact => "exact".to_string(),
        Resolution::Fuzzy => format!("fuzzy {:.2}", entry.match_score),
        Resolution::Unresolved => format!("unresolved {:.2}", entry.match_score),
        Resolution::Manual => "manual".to_string(),
        Resolution::Dismissed => "not a climb".to_string(),
    }
}

/// Format one entry as an indexed block
pub fn format_entry(index: usize, entry: &ClimbEntry) -> String {
    let mut output = format!("[{}] {} ({})", index, entry.climb_info, resolution_label(entry));
    if entry.needs_review() {
        output.push_str("  * review");
    }
    output.push('\n');

    output.push_str(&format!("    from:    {}\n", entry.source_text));
    if !entry.climb_events.is_empty() {
        let events: Vec<String> = entry.climb_events.iter().map(|e| e.to_string()).collect();
        output.push_str(&format!("    events:  {}\n", events.join(", ")));
    }
    if !entry.comment.is_empty() {
        output.push_str(&format!("    comment: {}\n", entry.comment));
    }
    output
}

/// Format a full day: header, log text and every entry
pub fn format_day(day: &ClimbingDay) -> String {
    let mut output = format!("{}  {}\n", day.key(), day.place_and_climbers);
    output.push_str(&format!("{}\n", day.log_text));

    if day.climb_entries.is_empty() {
        output.push_str("\nNo climbs found\n");
        return output;
    }

    output.push('\n');
    for (index, entry) in day.climb_entries.iter().enumerate() {
        output.push_str(&format_entry(index, entry));
    }
    output
}

/// The day's log text with one entry in bold
pub fn highlight_entry(day: &ClimbingDay, index: usize) -> Option<String> {
    let (before, entry, after) = day.entry_context(index)?;
    Some(format!("{}{}{}{}{}", before, BOLD, entry, RESET, after))
}

/// One line per day
pub fn format_day_list(days: &[ClimbingDay]) -> String {
    if days.is_empty() {
        return "No days found".to_string();
    }

    let mut output = String::new();
    for day in days {
        let review = day.entries_needing_review().len();
        output.push_str(&format!(
            "{}  {:>2} climbs  {:>2} to review  {}\n",
            day.key(),
            day.climb_entries.len(),
            review,
            day.place_and_climbers
        ));
    }
    output
}

pub fn format_route_list(routes: &[RouteInfo]) -> String {
    if routes.is_empty() {
        return "No routes registered".to_string();
    }

    let mut output = String::new();
    for route in routes {
        let extra: Vec<&str> = route
            .aliases()
            .iter()
            .map(String::as_str)
            .filter(|a| *a != route.name())
            .collect();
        if extra.is_empty() {
            output.push_str(&format!("{}\n", route));
        } else {
            output.push_str(&format!("{}  (aka {})\n", route, extra.join(", ")));
        }
    }
    output
}

pub fn format_route_candidates(candidates: &[RouteCandidate]) -> String {
    if candidates.is_empty() {
        return "No matching routes".to_string();
    }

    let mut output = String::new();
    for candidate in candidates {
        let marker = if candidate.accepted { "*" } else { " " };
        output.push_str(&format!(
            "{} {:.2}  {}  via \"{}\"\n",
            marker, candidate.score, candidate.route, candidate.alias
        ));
    }
    output
}

pub fn format_import_summary(summary: &ImportSummary) -> String {
    format!(
        "Imported {} days ({} climbs, {} to review), skipped {} already stored",
        summary.imported, summary.entries, summary.needs_review, summary.skipped
    )
}

pub fn format_config(config: &Config) -> String {
    let climbers: Vec<&str> = config.climbers.iter().map(|c| c.code.as_str()).collect();
    format!(
        "match_threshold = {}\nplace_filter = {}\nclimbers = {}\ncreated = {}",
        config.match_threshold,
        config.place_filter,
        climbers.join(","),
        config.created.to_rfc3339()
    )
}
