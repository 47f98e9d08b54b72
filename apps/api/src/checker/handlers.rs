//! Axum route handlers for Checker mode.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::checker::cv_input::{CvFile, CvInput};
use crate::checker::gap_analysis::{
    check_cv, require_job_description, CheckerResponse, PlatformGroup,
};
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::state::AppState;

/// A file as the browser's `FileReader` hands it over: base64 plus MIME type.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineFile {
    pub data: String,
    pub mime_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckCvRequest {
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub cv_text: Option<String>,
    #[serde(default)]
    pub cv_file: Option<InlineFile>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckCvResponse {
    #[serde(flatten)]
    pub report: CheckerResponse,
    pub gaps_by_platform: Vec<PlatformGroup>,
}

impl From<CheckerResponse> for CheckCvResponse {
    fn from(report: CheckerResponse) -> Self {
        CheckCvResponse {
            gaps_by_platform: report.gaps_by_platform(),
            report,
        }
    }
}

/// POST /api/v1/cv/check
///
/// JSON body with either `cvText` or a base64 `cvFile`. The file wins if both
/// are sent.
pub async fn handle_check_cv(
    State(state): State<AppState>,
    AppJson(request): AppJson<CheckCvRequest>,
) -> Result<Json<CheckCvResponse>, AppError> {
    let job_description = require_job_description(&request.job_description)?;
    let file = request
        .cv_file
        .map(|f| CvFile::from_base64(&f.data, f.mime_type.as_deref()))
        .transpose()?;
    let cv = CvInput::resolve(request.cv_text, file)?;

    let report = check_cv(state.model.as_ref(), &cv, job_description).await?;
    Ok(Json(report.into()))
}

/// POST /api/v1/cv/check/upload
///
/// Multipart form: `jobDescription`, optional `cvText`, optional `cv` file part.
pub async fn handle_check_cv_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<CheckCvResponse>, AppError> {
    let mut job_description = String::new();
    let mut cv_text: Option<String> = None;
    let mut upload: Option<(Option<String>, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("jobDescription") => job_description = field.text().await?,
            Some("cvText") => cv_text = Some(field.text().await?),
            Some("cv") => {
                let mime_type = field.content_type().map(str::to_string);
                let file_name = field.file_name().map(str::to_string);
                let bytes = field.bytes().await?;
                // An empty file part is what browsers send when nothing was picked
                if bytes.is_empty() && file_name.as_deref().unwrap_or_default().is_empty() {
                    continue;
                }
                debug!(
                    "CV upload received: name={:?}, type={:?}, bytes={}",
                    file_name,
                    mime_type,
                    bytes.len()
                );
                upload = Some((mime_type, bytes));
            }
            _ => {}
        }
    }

    let job_description = require_job_description(&job_description)?;
    let file = upload
        .map(|(mime_type, bytes)| CvFile::pdf(mime_type.as_deref(), bytes))
        .transpose()?;
    let cv = CvInput::resolve(cv_text, file)?;

    let report = check_cv(state.model.as_ref(), &cv, job_description).await?;
    Ok(Json(report.into()))
}
