use crate::config::Config;
use crate::dashboard::AnalysisReport;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// Full upload response: transport conveniences (filename, shape, preview)
/// layered over the core analysis report.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AnalyzeResponse {
    pub filename: String,
    pub rows: usize,
    pub columns: Vec<String>,
    pub preview: Vec<serde_json::Map<String, serde_json::Value>>,
    #[serde(flatten)]
    pub report: AnalysisReport,
}
