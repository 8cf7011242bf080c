//! Sort specification types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OrdoError;

/// Sort order for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending order (lowest to highest).
    #[default]
    Asc,
    /// Descending order (highest to lowest).
    Desc,
}

impl SortOrder {
    /// Build from an "ascending" flag.
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        }
    }

    /// Whether this is ascending order.
    pub fn is_ascending(&self) -> bool {
        matches!(self, SortOrder::Asc)
    }
}

impl FromStr for SortOrder {
    type Err = OrdoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            other => Err(OrdoError::query(format!("unknown sort order {other:?}"))),
        }
    }
}

/// One tie-break rule of a sort specification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortRule {
    /// Field name to sort by.
    pub field: String,
    /// Sort order.
    #[serde(default)]
    pub order: SortOrder,
}

impl SortRule {
    /// Create a rule.
    pub fn new<S: Into<String>>(field: S, order: SortOrder) -> Self {
        SortRule {
            field: field.into(),
            order,
        }
    }
}

/// An ordered list of sort rules. The first rule that tells two documents
/// apart decides their order.
///
/// ```
/// use ordo::sort::SortSpec;
///
/// let spec = SortSpec::new().asc("name").desc("popularity");
/// assert_eq!(spec.key(), "(name-true)(popularity-false)");
///
/// let parsed: SortSpec = "name:asc,popularity:desc".parse().unwrap();
/// assert_eq!(parsed, spec);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortSpec {
    rules: Vec<SortRule>,
}

impl SortSpec {
    /// The empty spec: documents are visited in store order.
    pub fn new() -> Self {
        SortSpec { rules: Vec::new() }
    }

    /// Append a rule.
    pub fn then_by<S: Into<String>>(mut self, field: S, order: SortOrder) -> Self {
        self.rules.push(SortRule::new(field, order));
        self
    }

    /// Append an ascending rule.
    pub fn asc<S: Into<String>>(self, field: S) -> Self {
        self.then_by(field, SortOrder::Asc)
    }

    /// Append a descending rule.
    pub fn desc<S: Into<String>>(self, field: S) -> Self {
        self.then_by(field, SortOrder::Desc)
    }

    /// The rules, in priority order.
    pub fn rules(&self) -> &[SortRule] {
        &self.rules
    }

    /// Check if the spec has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Canonical label such as `(name-true)(popularity-false)`. Rule order
    /// is part of the label. Field names are not escaped, so two specs can
    /// share a label; the index cache is keyed by the spec itself.
    pub fn key(&self) -> String {
        self.rules
            .iter()
            .map(|r| format!("({}-{})", r.field, r.order.is_ascending()))
            .collect()
    }
}

impl From<Vec<SortRule>> for SortSpec {
    fn from(rules: Vec<SortRule>) -> Self {
        SortSpec { rules }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// Parses `field[:asc|:desc]` rules separated by commas. The order defaults
/// to ascending. An empty string is the empty spec.
impl FromStr for SortSpec {
    type Err = OrdoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut spec = SortSpec::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (field, order) = match part.split_once(':') {
                Some((field, order)) => (field.trim(), order.trim().parse()?),
                None => (part, SortOrder::Asc),
            };
            if field.is_empty() {
                return Err(OrdoError::query(format!("sort rule {part:?} has no field")));
            }
            spec = spec.then_by(field, order);
        }
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_depends_on_rule_order() {
        let a = SortSpec::new().asc("name").asc("popularity");
        let b = SortSpec::new().asc("popularity").asc("name");
        assert_ne!(a.key(), b.key());
        assert_eq!(SortSpec::new().key(), "");
        assert_eq!(SortSpec::new().desc("name").key(), "(name-false)");
    }

    #[test]
    fn test_parse() {
        let spec: SortSpec = " name , popularity:DESC ".parse().unwrap();
        assert_eq!(spec.rules()[0], SortRule::new("name", SortOrder::Asc));
        assert_eq!(spec.rules()[1], SortRule::new("popularity", SortOrder::Desc));

        assert!("".parse::<SortSpec>().unwrap().is_empty());
        assert!("name:sideways".parse::<SortSpec>().is_err());
        assert!(":asc".parse::<SortSpec>().is_err());
    }

    #[test]
    fn test_from_ascending() {
        assert_eq!(SortOrder::from_ascending(true), SortOrder::Asc);
        assert_eq!(SortOrder::from_ascending(false), SortOrder::Desc);
    }

    #[test]
    fn test_json_shape() {
        let spec: SortSpec =
            serde_json::from_str(r#"[{"field":"name"},{"field":"popularity","order":"desc"}]"#)
                .unwrap();
        assert_eq!(spec, SortSpec::new().asc("name").desc("popularity"));
    }
}
