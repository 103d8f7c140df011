//! Dashboard pipeline
//!
//! One linear pass over a parsed table:
//! profile -> classify -> recommend visuals -> generate insights -> suggest
//! formulas, merged into a single report. Every stage is a pure function of
//! the input table; nothing persists between calls.

pub mod insights;
pub mod powerbi;
pub mod profile;
pub mod semantics;
pub mod visuals;

use serde::Serialize;

pub use insights::generate_insights;
pub use powerbi::{powerbi_export, PowerBiExport};
pub use profile::{profile_table, ColumnProfile, TableProfile};
pub use semantics::{classify_column, classify_table, SemanticLabel, Semantics};
pub use visuals::{recommend_visuals, ChartType, VisualSpec, YAxis};

use crate::table::Table;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSpec {
    pub semantics: Semantics,
    pub visuals: Vec<VisualSpec>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub profile: TableProfile,
    pub dashboard_spec: DashboardSpec,
    pub insights: Vec<String>,
    pub powerbi: PowerBiExport,
}

pub fn analyze(table: &Table) -> AnalysisReport {
    let profile = profile_table(table);
    let semantics = classify_table(table);
    let visuals = recommend_visuals(&semantics);
    let insights = generate_insights(table);
    let powerbi = powerbi_export(visuals.clone());

    AnalysisReport {
        profile,
        dashboard_spec: DashboardSpec { semantics, visuals },
        insights,
        powerbi,
    }
}
