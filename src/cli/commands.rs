//! Command implementations for the ordo CLI.

use anyhow::Context;
use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::EngineConfig;
use crate::engine::SearchEngine;
use crate::loader::{LoadReport, load_path};
use crate::search::query::Query;

/// Execute a CLI command.
pub fn execute_command(args: OrdoArgs) -> anyhow::Result<()> {
    match &args.command {
        Command::Search(search_args) => search(search_args, &args),
        Command::Stats(stats_args) => stats(stats_args, &args),
    }
}

/// Build an engine with the configured cache policy and the `--map` mappings.
fn open_engine(data: &DataArgs, cli_args: &OrdoArgs) -> anyhow::Result<(SearchEngine, LoadReport)> {
    let config = match &cli_args.config {
        Some(path) => EngineConfig::from_json_file(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let mut engine = SearchEngine::new(config)?;
    engine.configure(data.mappings());

    let report = load_path(&mut engine, &data.data, data.limit_files)
        .with_context(|| format!("failed to load {}", data.data.display()))?;
    info!(
        "loaded {} documents from {} files ({} skipped)",
        report.documents,
        report.files_loaded,
        report.files_skipped.len()
    );
    Ok((engine, report))
}

/// Run one query and print its hits.
fn search(args: &SearchArgs, cli_args: &OrdoArgs) -> anyhow::Result<()> {
    let (mut engine, _) = open_engine(&args.data, cli_args)?;

    let query = Query::text(&args.field, &args.query).sorted_by(args.sort_spec());
    let results = engine.search(&query)?;

    let output = SearchOutput {
        query: args.query.clone(),
        field: args.field.clone(),
        index_key: results.index_key.clone(),
        total_hits: results.total_hits,
        hits: results
            .hits
            .iter()
            .take(args.limit)
            .map(|hit| HitOutput {
                doc_id: hit.doc_id,
                fields: hit.document.fields().clone(),
            })
            .collect(),
    };
    output_result(&output, cli_args)
}

/// Build the index for the requested order and print its size.
fn stats(args: &StatsArgs, cli_args: &OrdoArgs) -> anyhow::Result<()> {
    let (mut engine, load) = open_engine(&args.data, cli_args)?;

    let index = engine.index_info(&args.sort_spec())?;
    let output = StatsOutput {
        load,
        documents: engine.len(),
        index,
        cache: engine.cache_stats(),
    };
    output_result(&output, cli_args)
}
