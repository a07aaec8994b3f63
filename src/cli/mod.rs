//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, RouteCommand};
pub use output::{
    format_config, format_day, format_day_list, format_entry, format_import_summary,
    format_route_candidates, format_route_list, highlight_entry,
};
