//! CLI command definitions

use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "climblog")]
#[command(about = "Turn free-form climbing log comments into structured records", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new climbing log
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Start with the built-in Rumney route catalogue
        #[arg(long)]
        seed_routes: bool,
    },

    /// Parse a comment and print the result without storing it
    Parse {
        /// Log comment, e.g. "Armed, Centerpiece (AS 2xlead 2h, TA redpoint)"
        comment: String,

        /// Default climbers for the comment (comma-separated codes)
        #[arg(long, value_delimiter = ',')]
        climbers: Vec<String>,

        /// Place and climbers header, e.g. "Rumney TA AS"
        #[arg(long, default_value = "")]
        header: String,
    },

    /// Import days from a CSV export of the log
    Import {
        /// CSV file with Date, Climb and Comments columns
        csv: PathBuf,

        /// Only import dates starting with this prefix (e.g. 2024 or 2024-06)
        #[arg(long, value_name = "PREFIX")]
        date: Option<String>,

        /// Re-import days that are already stored
        #[arg(long)]
        force: bool,
    },

    /// Show a stored day
    Show {
        /// Date (YYYY-MM-DD or M/D/YYYY)
        date: String,

        /// Highlight one entry in the log text
        #[arg(long, value_name = "INDEX")]
        entry: Option<usize>,
    },

    /// List stored days
    List {
        /// Start date (inclusive)
        #[arg(long)]
        from: Option<String>,

        /// End date (inclusive)
        #[arg(long)]
        to: Option<String>,

        /// Limit number of results
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Manage the route registry
    Route {
        #[command(subcommand)]
        action: RouteCommand,
    },

    /// Correct a parsed entry
    #[command(group(
        ArgGroup::new("correction")
            .required(true)
            .args(["route", "attempts", "not_a_climb"])
    ))]
    Correct {
        /// Date of the stored day
        date: String,

        /// Entry index as shown by `climblog show`
        index: usize,

        /// Use this registered route (name or alias)
        #[arg(long, value_name = "NAME")]
        route: Option<String>,

        /// Also remember the entry's text as an alias of the route
        #[arg(long, requires = "route")]
        remember_alias: bool,

        /// Replace a climber's attempts, e.g. AS=2hc (h: hang, c: clean)
        #[arg(long, value_name = "CLIMBER=SPEC")]
        attempts: Option<String>,

        /// The entry is not a climb
        #[arg(long)]
        not_a_climb: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum RouteCommand {
    /// Register a new route
    Add {
        name: String,
        grade: String,

        /// Extra spelling of the name (repeatable)
        #[arg(long = "alias", value_name = "ALIAS")]
        aliases: Vec<String>,
    },

    /// Add an alias to a registered route
    Alias { name: String, alias: String },

    /// Rank routes against an approximate name
    Find {
        approx: String,

        #[arg(short = 'n', long, default_value_t = 5)]
        limit: usize,
    },

    /// List registered routes
    List,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_climbers_list() {
        let cli = Cli::try_parse_from(["climblog", "parse", "Armed", "--climbers", "TA,AS"]).unwrap();
        match cli.command {
            Commands::Parse { climbers, header, .. } => {
                assert_eq!(climbers, vec!["TA", "AS"]);
                assert_eq!(header, "");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_correct_requires_exactly_one_fix() {
        assert!(Cli::try_parse_from(["climblog", "correct", "2024-06-26", "0"]).is_err());
        assert!(Cli::try_parse_from([
            "climblog",
            "correct",
            "2024-06-26",
            "0",
            "--not-a-climb",
            "--attempts",
            "AS=c"
        ])
        .is_err());
        assert!(Cli::try_parse_from(["climblog", "correct", "2024-06-26", "0", "--not-a-climb"]).is_ok());
    }

    #[test]
    fn test_route_add_aliases() {
        let cli = Cli::try_parse_from([
            "climblog", "route", "add", "Science Friction", "10a", "--alias", "Sci Fri",
        ])
        .unwrap();
        match cli.command {
            Commands::Route {
                action: RouteCommand::Add { name, aliases, .. },
            } => {
                assert_eq!(name, "Science Friction");
                assert_eq!(aliases, vec!["Sci Fri"]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
