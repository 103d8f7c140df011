use axum::{extract::Multipart, routing::post, Json, Router};
use bytes::Bytes;
use tracing::info;

use crate::dashboard;
use crate::ingest::{parse_table, FileFormat};
use crate::models::{AnalyzeResponse, AppState};
use crate::types::{AppError, AppResult};

const PREVIEW_ROWS: usize = 5;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/analyze/upload", post(upload_and_analyze))
        .with_state(state)
}

async fn upload_and_analyze(mut multipart: Multipart) -> AppResult<Json<AnalyzeResponse>> {
    let (filename, content) = read_file_field(&mut multipart).await?;
    info!(filename = %filename, size = content.len(), "Upload received");

    // Format is decided by extension alone; unsupported files never reach
    // the analysis pipeline.
    let format = FileFormat::from_filename(&filename)?;
    let table = parse_table(format, &content)?;
    let report = dashboard::analyze(&table);

    info!(
        filename = %filename,
        rows = table.row_count(),
        visuals = report.dashboard_spec.visuals.len(),
        "Analysis complete"
    );

    Ok(Json(AnalyzeResponse {
        rows: table.row_count(),
        columns: table.column_names(),
        preview: table.preview(PREVIEW_ROWS),
        filename,
        report,
    }))
}

async fn read_file_field(multipart: &mut Multipart) -> AppResult<(String, Bytes)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidRequest(e.to_string()))?
    {
        if field.name() == Some("file") {
            let filename = field
                .file_name()
                .unwrap_or("uploaded_file")
                .to_string();
            let content = field
                .bytes()
                .await
                .map_err(|e| AppError::InvalidRequest(e.to_string()))?;
            return Ok((filename, content));
        }
    }
    Err(AppError::InvalidRequest(
        "multipart field 'file' is required".to_string(),
    ))
}
