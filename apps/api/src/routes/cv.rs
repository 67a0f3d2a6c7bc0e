use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::models::cv::{CvKind, CvOption, DOWNLOAD_CV_FILENAME};
use crate::state::AppState;

/// GET /api/download-cv
///
/// Reads the configured CV file fully into memory and sends it as an
/// attachment. A missing or unreadable file is a 500; no fallback path is
/// tried.
pub async fn handle_download_cv(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let contents = tokio::fs::read(&state.config.cv_path)
        .await
        .map_err(AppError::Download)?;

    info!(
        "Serving CV download ({} bytes) from {}",
        contents.len(),
        state.config.cv_path.display()
    );

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{DOWNLOAD_CV_FILENAME}\""),
        ),
    ];

    Ok((headers, Bytes::from(contents)))
}

/// GET /api/cv/options
///
/// The CV variants the client can download straight from `/public`.
pub async fn handle_cv_options() -> Json<Vec<CvOption>> {
    Json(CvKind::ALL.into_iter().map(CvOption::from).collect())
}
