//! Bulk loading of JSON records into a [`SearchEngine`].
//!
//! Three file layouts are accepted. A `.json` file holds an array of records
//! or a single record:
//!
//! ```json
//! [{"name": "blue dress", "popularity": 10}, {"name": "red hat", "popularity": 3}]
//! ```
//!
//! ```json
//! {
//!   "name": "blue dress",
//!   "popularity": 10
//! }
//! ```
//!
//! A `.jsonl` file holds one record per line. A `.json` file that is not a
//! single JSON value is read as JSON lines too.
//!
//! ```jsonl
//! {"name": "blue dress", "popularity": 10}
//! {"name": "red hat", "popularity": 3}
//! ```
//!
//! A file is parsed completely before any of its records are indexed, so a
//! malformed file contributes nothing.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, trace, warn};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::document::document::Fields;
use crate::document::field_value::FieldValue;
use crate::engine::SearchEngine;
use crate::error::{ConversionError, OrdoError, Result};
use crate::schema::{FieldType, Mappings};

/// Number of files [`load_json_dir`] reads when no other limit is given.
pub const DEFAULT_FILE_LIMIT: usize = 100;

/// Outcome of loading a directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Files whose records were indexed.
    pub files_loaded: usize,
    /// Files that could not be parsed.
    pub files_skipped: Vec<PathBuf>,
    /// Records indexed.
    pub documents: usize,
}

/// Index every record of one JSON or JSON-lines file. Returns the number of
/// records indexed.
///
/// A conversion error stops loading; records indexed before it stay stored.
pub fn load_json_file<P: AsRef<Path>>(engine: &mut SearchEngine, path: P) -> Result<usize> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let records = parse_records(path, &text)?;

    let count = records.len();
    for record in records {
        let fields = to_fields(record, engine.mappings())?;
        engine.index(fields)?;
    }
    debug!("loaded {count} records from {}", path.display());
    Ok(count)
}

/// Index the `.json` and `.jsonl` files of `dir` in file name order, reading
/// at most `limit_files` files.
///
/// Files that fail to parse are skipped and listed in the report. Any other
/// error stops loading.
pub fn load_json_dir<P: AsRef<Path>>(
    engine: &mut SearchEngine,
    dir: P,
    limit_files: usize,
) -> Result<LoadReport> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir.as_ref())? {
        let path = entry?.path();
        if path.is_file() && has_json_extension(&path) {
            files.push(path);
        }
    }
    files.sort();

    let mut report = LoadReport::default();
    for path in files.into_iter().take(limit_files) {
        match load_json_file(engine, &path) {
            Ok(count) => {
                report.files_loaded += 1;
                report.documents += count;
            }
            Err(OrdoError::Json(e)) => {
                warn!("skipping {}: {e}", path.display());
                report.files_skipped.push(path);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(report)
}

/// Load a directory with [`load_json_dir`] or a single file with
/// [`load_json_file`], depending on what `path` is.
pub fn load_path<P: AsRef<Path>>(
    engine: &mut SearchEngine,
    path: P,
    limit_files: usize,
) -> Result<LoadReport> {
    let path = path.as_ref();
    if path.is_dir() {
        load_json_dir(engine, path, limit_files)
    } else {
        let documents = load_json_file(engine, path)?;
        Ok(LoadReport {
            files_loaded: 1,
            files_skipped: Vec::new(),
            documents,
        })
    }
}

/// Convert one JSON object into fields, checking mapped fields against their
/// declared types.
///
/// Unmapped values that are neither strings nor integers are dropped.
pub fn to_fields(record: Map<String, Value>, mappings: &Mappings) -> Result<Fields> {
    let mut fields = Fields::new();
    for (name, value) in record {
        let converted = match mappings.get(&name).map(|m| m.field_type) {
            Some(expected) => Some(convert_mapped(&name, value, expected)?),
            None => convert_unmapped(&name, value),
        };
        if let Some(value) = converted {
            fields.insert(name, value);
        }
    }
    Ok(fields)
}

fn convert_mapped(name: &str, value: Value, expected: FieldType) -> Result<FieldValue> {
    let converted = match (expected, &value) {
        (FieldType::Text, Value::String(s)) => Some(FieldValue::Text(s.clone())),
        (FieldType::Integer, Value::Number(n)) => n.as_i64().map(FieldValue::Integer),
        _ => None,
    };
    converted.ok_or_else(|| {
        ConversionError::TypeMismatch {
            field: name.to_string(),
            expected,
            found: json_kind(&value).to_string(),
        }
        .into()
    })
}

fn convert_unmapped(name: &str, value: Value) -> Option<FieldValue> {
    match value {
        Value::String(s) => Some(FieldValue::Text(s)),
        Value::Number(n) if n.is_i64() => n.as_i64().map(FieldValue::Integer),
        other => {
            trace!("dropping unmapped field {name:?} ({})", json_kind(&other));
            None
        }
    }
}

fn parse_records(path: &Path, text: &str) -> Result<Vec<Map<String, Value>>> {
    if path.extension().and_then(|ext| ext.to_str()) == Some("jsonl") {
        return parse_json_lines(text);
    }
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(record)) => Ok(vec![record]),
        Ok(value) => Ok(serde_json::from_value(value)?),
        Err(err) if text.trim_start().starts_with('[') => Err(err.into()),
        Err(err) => parse_json_lines(text).map_err(|_| OrdoError::from(err)),
    }
}

fn parse_json_lines(text: &str) -> Result<Vec<Map<String, Value>>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| serde_json::from_str(line).map_err(OrdoError::from))
        .collect()
}

fn has_json_extension(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("json") | Some("jsonl")
    )
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() => "integer",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "number",
        Value::String(_) => "text",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::schema::FieldMapping;

    fn mappings() -> Mappings {
        Mappings::new()
            .with_field("name", FieldMapping::text())
            .with_field("popularity", FieldMapping::integer())
    }

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_to_fields_converts_mapped_values() {
        let record = object(json!({"name": "blue dress", "popularity": 7, "brand": "acme"}));
        let fields = to_fields(record, &mappings()).unwrap();

        assert_eq!(fields.get("name"), Some(&FieldValue::Text("blue dress".into())));
        assert_eq!(fields.get("popularity"), Some(&FieldValue::Integer(7)));
        assert_eq!(fields.get("brand"), Some(&FieldValue::Text("acme".into())));
    }

    #[test]
    fn test_to_fields_drops_unmapped_values_it_cannot_represent() {
        let record = object(json!({"name": "x", "popularity": 1, "tags": ["a"], "price": 9.5}));
        let fields = to_fields(record, &mappings()).unwrap();
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_to_fields_rejects_wrong_type_for_mapped_field() {
        let record = object(json!({"name": "x", "popularity": 1.5}));
        let err = to_fields(record, &mappings()).unwrap_err();
        assert_eq!(
            err.as_conversion(),
            Some(&ConversionError::TypeMismatch {
                field: "popularity".to_string(),
                expected: FieldType::Integer,
                found: "float".to_string(),
            })
        );
    }

    #[test]
    fn test_load_json_lines_file() {
        let mut file = NamedTempFile::with_suffix(".jsonl").unwrap();
        writeln!(file, r#"{{"name": "a thing", "popularity": 1}}"#).unwrap();
        writeln!(file).unwrap();
        writeln!(file, r#"{{"name": "b thing", "popularity": 2}}"#).unwrap();
        file.flush().unwrap();

        let mut engine = SearchEngine::default();
        engine.configure(mappings());
        assert_eq!(load_json_file(&mut engine, file.path()).unwrap(), 2);
        assert_eq!(engine.len(), 2);
    }

    #[test]
    fn test_load_json_array_file() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        write!(
            file,
            r#"[{{"name": "a thing", "popularity": 1}}, {{"name": "b", "popularity": 2}}]"#
        )
        .unwrap();
        file.flush().unwrap();

        let mut engine = SearchEngine::default();
        engine.configure(mappings());
        assert_eq!(load_json_file(&mut engine, file.path()).unwrap(), 2);
    }

    #[test]
    fn test_load_single_record_file() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        write!(file, "{{\n  \"name\": \"solo hat\",\n  \"popularity\": 4\n}}\n").unwrap();
        file.flush().unwrap();

        let mut engine = SearchEngine::default();
        engine.configure(mappings());
        assert_eq!(load_json_file(&mut engine, file.path()).unwrap(), 1);
        assert_eq!(engine.get(0).unwrap().get_text("name"), Some("solo hat"));
    }

    #[test]
    fn test_json_lines_in_json_file() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        writeln!(file, r#"{{"name": "a thing", "popularity": 1}}"#).unwrap();
        writeln!(file, r#"{{"name": "b thing", "popularity": 2}}"#).unwrap();
        file.flush().unwrap();

        let mut engine = SearchEngine::default();
        engine.configure(mappings());
        assert_eq!(load_json_file(&mut engine, file.path()).unwrap(), 2);
    }

    #[test]
    fn test_array_of_non_records_is_a_json_error() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        write!(file, "[1, 2]").unwrap();
        file.flush().unwrap();

        let mut engine = SearchEngine::default();
        let err = load_json_file(&mut engine, file.path()).unwrap_err();
        assert!(matches!(err, OrdoError::Json(_)));
    }

    #[test]
    fn test_malformed_file_is_a_json_error() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        write!(file, r#"[{{"name": "a thing""#).unwrap();
        file.flush().unwrap();

        let mut engine = SearchEngine::default();
        let err = load_json_file(&mut engine, file.path()).unwrap_err();
        assert!(matches!(err, OrdoError::Json(_)));
        assert!(engine.is_empty());
    }
}
