//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::args::{OrdoArgs, OutputFormat};
use crate::document::document::{DocId, Fields};
use crate::engine::IndexInfo;
use crate::index::manager::IndexCacheStats;
use crate::loader::LoadReport;

/// Result structure for a search.
#[derive(Debug, Serialize)]
pub struct SearchOutput {
    pub query: String,
    pub field: String,
    pub index_key: String,
    pub total_hits: usize,
    pub hits: Vec<HitOutput>,
}

/// One printed hit.
#[derive(Debug, Serialize)]
pub struct HitOutput {
    pub doc_id: DocId,
    pub fields: Fields,
}

/// Result structure for the stats command.
#[derive(Debug, Serialize)]
pub struct StatsOutput {
    pub load: LoadReport,
    pub documents: usize,
    pub index: IndexInfo,
    pub cache: IndexCacheStats,
}

/// Plain-text rendering of a command result.
pub trait HumanOutput {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl HumanOutput for SearchOutput {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "{} hits for {:?} in {} (index {:?})",
            self.total_hits, self.query, self.field, self.index_key
        )?;
        for (i, hit) in self.hits.iter().enumerate() {
            let mut fields: Vec<_> = hit.fields.iter().collect();
            fields.sort_by(|a, b| a.0.cmp(b.0));
            let rendered: Vec<String> = fields
                .into_iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect();
            writeln!(out, "{:>4}. [{}] {}", i + 1, hit.doc_id, rendered.join(" "))?;
        }
        if self.hits.len() < self.total_hits {
            writeln!(out, "... {} more", self.total_hits - self.hits.len())?;
        }
        Ok(())
    }
}

impl HumanOutput for StatsOutput {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Documents:      {}", self.documents)?;
        writeln!(out, "Files loaded:   {}", self.load.files_loaded)?;
        if !self.load.files_skipped.is_empty() {
            writeln!(out, "Files skipped:  {}", self.load.files_skipped.len())?;
            for path in &self.load.files_skipped {
                writeln!(out, "  {}", path.display())?;
            }
        }
        writeln!(out, "Index key:      {:?}", self.index.key)?;
        writeln!(out, "Indexed docs:   {}", self.index.doc_count)?;
        writeln!(out, "Distinct terms: {}", self.index.term_count)?;
        writeln!(out, "Index builds:   {}", self.cache.builds)?;
        Ok(())
    }
}

/// Output a result in the format selected on the command line.
pub fn output_result<T>(result: &T, args: &OrdoArgs) -> anyhow::Result<()>
where
    T: Serialize + HumanOutput,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(result, args.output_format, args.pretty, &mut out)
}

/// Write a result to `out`.
pub fn write_result<T>(
    result: &T,
    format: OutputFormat,
    pretty: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()>
where
    T: Serialize + HumanOutput,
{
    match format {
        OutputFormat::Human => result.write_human(out)?,
        OutputFormat::Json => {
            let json = if pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}
