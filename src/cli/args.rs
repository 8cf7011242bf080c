//! Command line argument parsing for the ordo CLI using clap.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::OrdoError;
use crate::loader::DEFAULT_FILE_LIMIT;
use crate::schema::{FieldMapping, FieldType, Mappings};
use crate::sort::SortSpec;

/// ordo - in-memory text search with results in a chosen order
#[derive(Parser, Debug, Clone)]
#[command(name = "ordo")]
#[command(about = "Load JSON records and run ordered AND queries over them")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct OrdoArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug, 4=trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Engine configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "ORDO_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl OrdoArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Load records and run one query
    Search(SearchArgs),

    /// Load records and show index statistics
    Stats(StatsArgs),
}

/// Where records come from and how their fields are typed.
#[derive(Parser, Debug, Clone)]
pub struct DataArgs {
    /// JSON or JSON-lines file, or a directory of them
    #[arg(short, long, value_name = "PATH")]
    pub data: PathBuf,

    /// Field mapping as NAME:TYPE[:sortable], TYPE is text or integer
    #[arg(short, long = "map", value_name = "MAPPING", required = true)]
    pub mappings: Vec<FieldArg>,

    /// Maximum number of files read from a directory
    #[arg(long, default_value_t = DEFAULT_FILE_LIMIT)]
    pub limit_files: usize,
}

impl DataArgs {
    /// Collect the `--map` arguments. A later mapping for the same field wins.
    pub fn mappings(&self) -> Mappings {
        let mut mappings = Mappings::new();
        for arg in &self.mappings {
            mappings.insert(arg.name.clone(), arg.mapping);
        }
        mappings
    }
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Query string; every term must match
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Text field to search
    #[arg(long, value_name = "FIELD")]
    pub field: String,

    /// Sort rules as FIELD[:asc|:desc], comma separated or repeated
    #[arg(short, long, value_name = "RULES")]
    pub sort: Vec<SortSpec>,

    /// Maximum number of results to print
    #[arg(short, long, default_value = "10")]
    pub limit: usize,
}

impl SearchArgs {
    /// All `--sort` arguments joined into one spec, in order.
    pub fn sort_spec(&self) -> SortSpec {
        join_sort_args(&self.sort)
    }
}

/// Arguments for showing statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Sort rules of the index to build
    #[arg(short, long, value_name = "RULES")]
    pub sort: Vec<SortSpec>,
}

impl StatsArgs {
    /// All `--sort` arguments joined into one spec, in order.
    pub fn sort_spec(&self) -> SortSpec {
        join_sort_args(&self.sort)
    }
}

fn join_sort_args(specs: &[SortSpec]) -> SortSpec {
    specs
        .iter()
        .flat_map(|spec| spec.rules().iter().cloned())
        .collect::<Vec<_>>()
        .into()
}

/// One `--map` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldArg {
    /// Field name.
    pub name: String,
    /// Declared type and sortability.
    pub mapping: FieldMapping,
}

impl FromStr for FieldArg {
    type Err = OrdoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':').map(str::trim);
        let name = parts.next().unwrap_or_default();
        if name.is_empty() {
            return Err(OrdoError::schema(format!("mapping {s:?} has no field name")));
        }
        let field_type = match parts.next() {
            Some(t) => t.parse::<FieldType>()?,
            None => FieldType::Text,
        };
        let sortable = match parts.next() {
            None => false,
            Some("sortable") => true,
            Some(other) => {
                return Err(OrdoError::schema(format!(
                    "unknown mapping option {other:?} in {s:?}"
                )));
            }
        };
        if parts.next().is_some() {
            return Err(OrdoError::schema(format!("too many parts in mapping {s:?}")));
        }

        Ok(FieldArg {
            name: name.to_string(),
            mapping: FieldMapping {
                field_type,
                sortable,
            },
        })
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::SortOrder;

    #[test]
    fn test_basic_search_command() {
        let args = OrdoArgs::try_parse_from([
            "ordo",
            "search",
            "--data",
            "/path/to/records",
            "--map",
            "name:text",
            "--map",
            "popularity:integer:sortable",
            "--sort",
            "popularity:desc",
            "--sort",
            "name",
            "--field",
            "name",
            "blue dress",
            "--limit",
            "20",
        ])
        .unwrap();

        if let Command::Search(search_args) = args.command {
            assert_eq!(search_args.data.data, PathBuf::from("/path/to/records"));
            assert_eq!(search_args.query, "blue dress");
            assert_eq!(search_args.field, "name");
            assert_eq!(search_args.limit, 20);
            assert_eq!(search_args.data.limit_files, DEFAULT_FILE_LIMIT);

            let mappings = search_args.data.mappings();
            assert_eq!(mappings.get("name"), Some(&FieldMapping::text()));
            assert_eq!(
                mappings.get("popularity"),
                Some(&FieldMapping::integer().sortable(true))
            );

            let spec = search_args.sort_spec();
            assert_eq!(spec.rules().len(), 2);
            assert_eq!(spec.rules()[0].order, SortOrder::Desc);
            assert_eq!(spec.key(), "(popularity-false)(name-true)");
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_stats_command() {
        let args = OrdoArgs::try_parse_from([
            "ordo", "stats", "--data", "records.json", "--map", "name", "-f", "json",
        ])
        .unwrap();

        assert_eq!(args.output_format, OutputFormat::Json);
        if let Command::Stats(stats_args) = args.command {
            assert!(stats_args.sort_spec().is_empty());
            assert_eq!(stats_args.data.mappings().text_fields(), vec!["name"]);
        } else {
            panic!("Expected Stats command");
        }
    }

    #[test]
    fn test_mapping_is_required() {
        let result = OrdoArgs::try_parse_from(["ordo", "stats", "--data", "records.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_field_arg_parsing() {
        let arg: FieldArg = "popularity:int".parse().unwrap();
        assert_eq!(arg.mapping, FieldMapping::integer());

        assert!("name:float".parse::<FieldArg>().is_err());
        assert!("name:text:indexed".parse::<FieldArg>().is_err());
        assert!(":text".parse::<FieldArg>().is_err());
        assert!("name:text:sortable:x".parse::<FieldArg>().is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        let base = ["ordo", "stats", "--data", "d", "--map", "name"];

        let args = OrdoArgs::try_parse_from(base).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = OrdoArgs::try_parse_from(["ordo", "-vvv"].into_iter().chain(base.into_iter().skip(1)))
            .unwrap();
        assert_eq!(args.verbosity(), 3);

        let args =
            OrdoArgs::try_parse_from(["ordo", "-q", "-v"].into_iter().chain(base.into_iter().skip(1)))
                .unwrap();
        assert_eq!(args.verbosity(), 0);
    }
}
