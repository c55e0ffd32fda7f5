use clap::{value_parser, Arg, ArgAction, Command};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod render;

fn snapshot_arg() -> Arg {
    Arg::new("snapshot")
        .long("snapshot")
        .value_name("FILE")
        .required(true)
        .help("JSON snapshot holding the fetched rows")
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON")
}

fn cli() -> Command {
    Command::new("sitebook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Construction dashboard views: War Room tasks, budget rollups and search")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .global(true)
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Emit logs as JSON lines on stderr"),
        )
        .subcommand(
            Command::new("tasks")
                .about("Show the War Room task view")
                .arg(snapshot_arg())
                .arg(
                    Arg::new("user")
                        .long("user")
                        .value_name("ID")
                        .help("Current user id"),
                )
                .arg(
                    Arg::new("project")
                        .long("project")
                        .value_name("ID")
                        .help("Only tasks of this project"),
                )
                .arg(
                    Arg::new("status")
                        .long("status")
                        .value_name("TOKEN")
                        .help("Status token, or overdue / blocking / on_me"),
                )
                .arg(
                    Arg::new("sort")
                        .long("sort")
                        .value_name("MODE")
                        .help("urgency, priority, project, date_newest, date_oldest, alpha_az, alpha_za or status"),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("budget")
                .about("Show budget rollups")
                .arg(snapshot_arg())
                .arg(
                    Arg::new("project")
                        .long("project")
                        .value_name("ID")
                        .help("Restrict to one project"),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("search")
                .about("Search projects, tasks and quotes")
                .arg(snapshot_arg())
                .arg(
                    Arg::new("query")
                        .required(true)
                        .help("Whitespace-separated search terms"),
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .default_value("10")
                        .value_parser(value_parser!(usize))
                        .help("Maximum hits per kind"),
                )
                .arg(json_arg()),
        )
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("log-json"));

    match commands::run(&matches).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let matches = cli()
            .try_get_matches_from([
                "sitebook", "budget", "--snapshot", "s.json", "--config", "c.toml", "--log-json",
            ])
            .unwrap();
        assert_eq!(matches.get_one::<String>("config").map(String::as_str), Some("c.toml"));
        assert!(matches.get_flag("log-json"));
    }

    #[test]
    fn search_requires_query() {
        assert!(cli()
            .try_get_matches_from(["sitebook", "search", "--snapshot", "s.json"])
            .is_err());
    }
}
