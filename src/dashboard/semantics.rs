// Semantic classifier: maps column names to a heuristic role. Naming
// keywords dominate over the storage kind; the rule list is evaluated in
// order and short-circuits on the first match.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::table::{DataKind, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticLabel {
    Date,
    Currency,
    Percentage,
    Dimension,
    Measure,
}

impl SemanticLabel {
    /// Columns that can feed a chart's value axis.
    pub fn is_measure_like(&self) -> bool {
        matches!(
            self,
            SemanticLabel::Currency | SemanticLabel::Percentage | SemanticLabel::Measure
        )
    }
}

const KEYWORD_RULES: &[(&[&str], SemanticLabel)] = &[
    (&["date", "dt", "month", "created", "signup"], SemanticLabel::Date),
    (&["rev", "mrr", "arr", "revenue", "gmv", "sales"], SemanticLabel::Currency),
    (&["churn", "cancel", "drop"], SemanticLabel::Percentage),
    (&["user", "customer", "account", "id"], SemanticLabel::Dimension),
];

pub fn classify_column(name: &str, kind: DataKind) -> SemanticLabel {
    let lower = name.to_lowercase();
    for (keywords, label) in KEYWORD_RULES {
        if keywords.iter().any(|k| lower.contains(k)) {
            return *label;
        }
    }
    if kind.is_numeric() {
        SemanticLabel::Measure
    } else {
        SemanticLabel::Dimension
    }
}

/// Label assignment for every column, preserving table column order.
/// Serializes as a column_name -> label map in that order.
#[derive(Debug, Clone)]
pub struct Semantics(Vec<(String, SemanticLabel)>);

impl Semantics {
    pub fn iter(&self) -> impl Iterator<Item = (&str, SemanticLabel)> {
        self.0.iter().map(|(name, label)| (name.as_str(), *label))
    }

    /// Column names carrying labels accepted by `pred`, in table order.
    pub fn names_where<F>(&self, pred: F) -> Vec<&str>
    where
        F: Fn(SemanticLabel) -> bool,
    {
        self.iter()
            .filter(|(_, label)| pred(*label))
            .map(|(name, _)| name)
            .collect()
    }
}

impl Serialize for Semantics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, label) in &self.0 {
            map.serialize_entry(name, label)?;
        }
        map.end()
    }
}

pub fn classify_table(table: &Table) -> Semantics {
    Semantics(
        table
            .columns()
            .iter()
            .map(|col| (col.name.clone(), classify_column(&col.name, col.kind)))
            .collect(),
    )
}
