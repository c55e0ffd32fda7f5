//! Subcommand handlers

use crate::render;
use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::Serialize;
use sitebook_core::{DashboardConfig, DashboardService, Snapshot, SnapshotSource};
use sitebook_model::ProjectId;
use sitebook_warroom::SortMode;

/// User id used when neither the config nor `--user` names one.
/// Snapshot sources serve every task regardless of user.
const LOCAL_USER: &str = "local";

pub(crate) async fn run(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;

    match matches.subcommand() {
        Some(("tasks", args)) => tasks(config, args).await,
        Some(("budget", args)) => budget(config, args).await,
        Some(("search", args)) => search(config, args).await,
        _ => anyhow::bail!("no subcommand given; see --help"),
    }
}

fn load_config(matches: &ArgMatches) -> Result<DashboardConfig> {
    match matches.get_one::<String>("config") {
        Some(path) => {
            tracing::debug!("Loading config from {}", path);
            Ok(DashboardConfig::load(path)?)
        }
        None => Ok(DashboardConfig::default()),
    }
}

fn service(mut config: DashboardConfig, args: &ArgMatches) -> Result<DashboardService<SnapshotSource>> {
    let path = args
        .get_one::<String>("snapshot")
        .context("--snapshot is required")?;
    let snapshot = Snapshot::from_path(path)?;
    tracing::info!(
        "Loaded snapshot {}: {} tasks, {} projects, {} quotes",
        path,
        snapshot.tasks.len(),
        snapshot.projects.len(),
        snapshot.quotes.len()
    );

    if let Some(user) = args.try_get_one::<String>("user").ok().flatten() {
        config = config.with_user(user.as_str());
    } else if config.current_user_id.is_none() {
        config = config.with_user(LOCAL_USER);
    }
    Ok(DashboardService::new(SnapshotSource::new(snapshot), config))
}

fn emit<T: Serialize>(value: &T, json: bool, text: impl FnOnce(&T) -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", text(value));
    }
    Ok(())
}

async fn tasks(config: DashboardConfig, args: &ArgMatches) -> Result<()> {
    let service = service(config, args)?;
    let mut view = service.config().task_view.clone();

    if let Some(project) = args.get_one::<String>("project") {
        view.filter = view.filter.for_project(project.as_str());
    }
    if let Some(status) = args.get_one::<String>("status") {
        view.filter = view.filter.with_status(status);
    }
    if let Some(sort) = args.get_one::<String>("sort") {
        view.sort = sort.parse::<SortMode>()?;
    }

    let model = service.task_view_with(&view).await?;
    emit(&model, args.get_flag("json"), render::task_view)
}

async fn budget(config: DashboardConfig, args: &ArgMatches) -> Result<()> {
    let service = service(config, args)?;
    let scope = args
        .get_one::<String>("project")
        .map(|id| ProjectId::new(id.as_str()))
        .or_else(|| service.config().budget_scope.clone());

    let view = service.budget_view(scope.as_ref()).await?;
    emit(&view, args.get_flag("json"), render::budget_view)
}

async fn search(config: DashboardConfig, args: &ArgMatches) -> Result<()> {
    let service = service(config, args)?;
    let query = args
        .get_one::<String>("query")
        .context("a search query is required")?;
    let limit = args.get_one::<usize>("limit").copied().unwrap_or(10);

    let results = service.search(query, limit).await?;
    emit(&results, args.get_flag("json"), render::search_results)
}
