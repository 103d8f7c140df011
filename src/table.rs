// In-memory tabular dataset: ordered columns of uniformly-sized cell vectors.
// Column order is an explicit attribute, not an iteration-order side effect.

use serde::Serialize;

use crate::types::{AppError, AppResult};

/// A single parsed cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Missing,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Numeric view of the cell, if it has one. Booleans do not count.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(v) => Some(*v as f64),
            CellValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Textual representation for profiling samples; None when missing.
    pub fn render(&self) -> Option<String> {
        match self {
            CellValue::Missing => None,
            CellValue::Bool(v) => Some(v.to_string()),
            CellValue::Int(v) => Some(v.to_string()),
            CellValue::Float(v) => Some(v.to_string()),
            CellValue::Text(v) => Some(v.clone()),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            CellValue::Missing => serde_json::Value::Null,
            CellValue::Bool(v) => serde_json::Value::Bool(*v),
            CellValue::Int(v) => serde_json::Value::from(*v),
            CellValue::Float(v) => {
                serde_json::Number::from_f64(*v).map_or(serde_json::Value::Null, serde_json::Value::Number)
            }
            CellValue::Text(v) => serde_json::Value::String(v.clone()),
        }
    }
}

/// Inferred storage kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DataKind {
    #[serde(rename = "integer")]
    Integer,
    #[serde(rename = "floating-point")]
    Float,
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "text")]
    Text,
}

impl DataKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataKind::Integer => "integer",
            DataKind::Float => "floating-point",
            DataKind::Boolean => "boolean",
            DataKind::Text => "text",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, DataKind::Integer | DataKind::Float)
    }
}

impl std::fmt::Display for DataKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub kind: DataKind,
    pub cells: Vec<CellValue>,
}

impl Column {
    /// Build a column, inferring its kind from the non-missing cells and
    /// coercing cells so the column holds a single kind throughout.
    pub fn new(name: impl Into<String>, cells: Vec<CellValue>) -> Self {
        let kind = infer_kind(&cells);
        let cells = coerce_cells(kind, cells);
        Self {
            name: name.into(),
            kind,
            cells,
        }
    }

    pub fn non_missing(&self) -> impl Iterator<Item = &CellValue> {
        self.cells.iter().filter(|c| !c.is_missing())
    }

    /// Non-missing cells as f64, in row order.
    pub fn numeric_series(&self) -> Vec<f64> {
        self.cells.iter().filter_map(|c| c.as_f64()).collect()
    }
}

fn infer_kind(cells: &[CellValue]) -> DataKind {
    let mut saw_int = false;
    let mut saw_float = false;
    let mut saw_bool = false;
    let mut saw_text = false;
    let mut saw_any = false;

    for cell in cells {
        match cell {
            CellValue::Missing => {}
            CellValue::Int(_) => {
                saw_int = true;
                saw_any = true;
            }
            CellValue::Float(_) => {
                saw_float = true;
                saw_any = true;
            }
            CellValue::Bool(_) => {
                saw_bool = true;
                saw_any = true;
            }
            CellValue::Text(_) => {
                saw_text = true;
                saw_any = true;
            }
        }
    }

    if !saw_any || saw_text {
        DataKind::Text
    } else if saw_bool && (saw_int || saw_float) {
        DataKind::Text
    } else if saw_bool {
        DataKind::Boolean
    } else if saw_float {
        DataKind::Float
    } else {
        DataKind::Integer
    }
}

fn coerce_cells(kind: DataKind, cells: Vec<CellValue>) -> Vec<CellValue> {
    match kind {
        DataKind::Float => cells
            .into_iter()
            .map(|c| match c {
                CellValue::Int(v) => CellValue::Float(v as f64),
                other => other,
            })
            .collect(),
        DataKind::Text => cells
            .into_iter()
            .map(|c| match c {
                CellValue::Missing => CellValue::Missing,
                CellValue::Text(v) => CellValue::Text(v),
                other => CellValue::Text(other.render().unwrap_or_default()),
            })
            .collect(),
        _ => cells,
    }
}

/// Parsed tabular dataset. Invariants: at least one column, and every
/// column has exactly `row_count` cells.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> AppResult<Self> {
        let first = columns
            .first()
            .ok_or_else(|| AppError::Parse("dataset has no columns".to_string()))?;
        let row_count = first.cells.len();
        for col in &columns {
            if col.cells.len() != row_count {
                return Err(AppError::Parse(format!(
                    "column '{}' has {} rows, expected {}",
                    col.name,
                    col.cells.len(),
                    row_count
                )));
            }
        }
        Ok(Self { columns, row_count })
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// First `limit` rows as name -> value records, in column order.
    pub fn preview(&self, limit: usize) -> Vec<serde_json::Map<String, serde_json::Value>> {
        let rows = self.row_count.min(limit);
        (0..rows)
            .map(|row| {
                self.columns
                    .iter()
                    .map(|col| (col.name.clone(), col.cells[row].to_json()))
                    .collect()
            })
            .collect()
    }
}
