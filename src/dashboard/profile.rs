// Column profiler: descriptive per-column statistics, one pass over the table.

use serde::Serialize;

use crate::table::{DataKind, Table};

const SAMPLE_LIMIT: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    pub dtype: DataKind,
    pub non_null: usize,
    pub nulls: usize,
    pub sample_values: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableProfile {
    pub row_count: usize,
    pub col_count: usize,
    pub columns: Vec<ColumnProfile>,
}

pub fn profile_table(table: &Table) -> TableProfile {
    let columns = table
        .columns()
        .iter()
        .map(|col| {
            let non_null = col.non_missing().count();
            let sample_values = col
                .non_missing()
                .take(SAMPLE_LIMIT)
                .filter_map(|c| c.render())
                .collect();
            ColumnProfile {
                name: col.name.clone(),
                dtype: col.kind,
                non_null,
                nulls: table.row_count() - non_null,
                sample_values,
            }
        })
        .collect();

    TableProfile {
        row_count: table.row_count(),
        col_count: table.columns().len(),
        columns,
    }
}
