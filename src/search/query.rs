//! Query types.

use serde::{Deserialize, Serialize};

use crate::sort::SortSpec;

/// A query string to match against one text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextClause {
    /// Field to search.
    pub field: String,
    /// Query string; analyzed like the field's values.
    pub value: String,
}

impl TextClause {
    /// Create a clause.
    pub fn new<F: Into<String>, V: Into<String>>(field: F, value: V) -> Self {
        TextClause {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Text clauses plus the order results should come back in.
///
/// Only the first clause is evaluated; one field is searched per call.
///
/// ```
/// use ordo::search::query::Query;
/// use ordo::sort::SortSpec;
///
/// let query = Query::text("name", "blue dress").sorted_by(SortSpec::new().desc("popularity"));
/// assert_eq!(query.text.len(), 1);
/// assert_eq!(query.sort.key(), "(popularity-false)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Text clauses. Clauses after the first are ignored.
    #[serde(default)]
    pub text: Vec<TextClause>,
    /// Result order.
    #[serde(default)]
    pub sort: SortSpec,
}

impl Query {
    /// Create an empty query.
    pub fn new() -> Self {
        Query::default()
    }

    /// Create a single-clause query with no sort rules.
    pub fn text<F: Into<String>, V: Into<String>>(field: F, value: V) -> Self {
        Query::new().with_clause(TextClause::new(field, value))
    }

    /// Append a text clause.
    pub fn with_clause(mut self, clause: TextClause) -> Self {
        self.text.push(clause);
        self
    }

    /// Set the sort specification.
    pub fn sorted_by(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_json() {
        let query: Query = serde_json::from_str(
            r#"{"text":[{"field":"name","value":"thing"}],"sort":[{"field":"name","order":"desc"}]}"#,
        )
        .unwrap();
        assert_eq!(
            query,
            Query::text("name", "thing").sorted_by(SortSpec::new().desc("name"))
        );

        let empty: Query = serde_json::from_str("{}").unwrap();
        assert!(empty.text.is_empty());
        assert!(empty.sort.is_empty());
    }
}
