//! Parse a comment without storing it

use crate::application::ParsingContext;
use crate::domain::{parse_day, ClimbingDay};
use chrono::{Local, NaiveDate};

/// Parse a single comment with the given context, dated today unless given.
pub fn preview_comment(
    context: &ParsingContext,
    comment: &str,
    header: &str,
    climbers: &[String],
    date: Option<NaiveDate>,
) -> ClimbingDay {
    let roster = context.roster(climbers, header);
    let date = date.unwrap_or_else(|| Local::now().date_naive());

    parse_day(
        date,
        header,
        comment,
        &roster,
        &context.routes,
        &context.climbers,
    )
}
