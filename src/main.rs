use clap::Parser;
use climblog::application::{
    preview_comment, BrowseService, ConfigService, CorrectionRequest, CorrectionService,
    ImportService, InitService, ListOptions, ParsingContext, RouteService,
};
use climblog::cli::{self, Cli, Commands, RouteCommand};
use climblog::error::ClimbError;
use climblog::infrastructure::{parse_sheet_date, FileSystemRepository};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), ClimbError> {
    match cli.command {
        Commands::Init { path, seed_routes } => InitService::execute(&path, seed_routes),

        Commands::Parse {
            comment,
            climbers,
            header,
        } => {
            // Outside a log directory the built-in catalogue is used
            let context = match FileSystemRepository::discover() {
                Ok(repo) => ParsingContext::load(&repo)?,
                Err(ClimbError::NotClimblogDirectory(_)) => ParsingContext::standalone(),
                Err(e) => return Err(e),
            };
            let day = preview_comment(&context, &comment, &header, &climbers, None);
            print!("{}", cli::format_day(&day));
            Ok(())
        }

        Commands::Import { csv, date, force } => {
            let repo = FileSystemRepository::discover()?;
            let summary = ImportService::new(repo).execute(&csv, date.as_deref(), force)?;
            println!("{}", cli::format_import_summary(&summary));
            Ok(())
        }

        Commands::Show { date, entry } => {
            let repo = FileSystemRepository::discover()?;
            let day = BrowseService::new(repo).show(parse_sheet_date(&date)?)?;

            match entry {
                Some(index) => {
                    let highlighted = cli::highlight_entry(&day, index).ok_or_else(|| {
                        ClimbError::InvalidCorrection(format!(
                            "Entry {} does not exist ({} entries on {})",
                            index,
                            day.climb_entries.len(),
                            day.key()
                        ))
                    })?;
                    println!("{}\n", highlighted);
                    println!("{}", day.climb_entries[index]);
                }
                None => print!("{}", cli::format_day(&day)),
            }
            Ok(())
        }

        Commands::List { from, to, limit } => {
            let repo = FileSystemRepository::discover()?;
            let options = ListOptions {
                from: from.as_deref().map(parse_sheet_date).transpose()?,
                to: to.as_deref().map(parse_sheet_date).transpose()?,
                limit,
            };
            let days = BrowseService::new(repo).list(&options)?;
            println!("{}", cli::format_day_list(&days).trim_end());
            Ok(())
        }

        Commands::Route { action } => {
            let repo = FileSystemRepository::discover()?;
            let service = RouteService::new(repo);

            match action {
                RouteCommand::Add {
                    name,
                    grade,
                    aliases,
                } => {
                    let route = service.add(&name, &grade, &aliases)?;
                    println!("Added {}", route);
                }
                RouteCommand::Alias { name, alias } => {
                    let route = service.alias(&name, &alias)?;
                    println!("{}: {}", route.name(), route.aliases().join(", "));
                }
                RouteCommand::Find { approx, limit } => {
                    let candidates = service.find(&approx, limit)?;
                    println!("{}", cli::format_route_candidates(&candidates).trim_end());
                }
                RouteCommand::List => {
                    let routes = service.list()?;
                    println!("{}", cli::format_route_list(&routes).trim_end());
                }
            }
            Ok(())
        }

        Commands::Correct {
            date,
            index,
            route,
            remember_alias,
            attempts,
            not_a_climb,
        } => {
            let repo = FileSystemRepository::discover()?;
            let date = parse_sheet_date(&date)?;

            let request = match (route, attempts, not_a_climb) {
                (Some(name), _, _) => CorrectionRequest::Route {
                    name,
                    remember_alias,
                },
                (None, Some(assignment), _) => CorrectionRequest::Attempts(assignment),
                (None, None, true) => CorrectionRequest::NotAClimb,
                (None, None, false) => {
                    return Err(ClimbError::InvalidCorrection(
                        "Give one of --route, --attempts or --not-a-climb".to_string(),
                    ))
                }
            };

            let entry = CorrectionService::new(repo).execute(date, index, &request)?;
            print!("{}", cli::format_entry(index, &entry));
            Ok(())
        }

        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("{}", cli::format_config(&config));
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: climblog config [--list | <key> [<value>]]");
                println!("Valid keys: match_threshold, place_filter, climbers, created");
            }
            Ok(())
        }
    }
}
