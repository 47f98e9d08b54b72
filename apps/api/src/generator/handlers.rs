//! Axum route handlers for Generator mode.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::generator::cv_draft::{generate_cv, DesignAction, GeneratorResponse, SkillGroup};
use crate::state::AppState;

/// Missing fields deserialize as empty so `generate_cv` reports them with
/// its own validation message.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCvRequest {
    #[serde(default)]
    pub career_details: String,
    #[serde(default)]
    pub target_job: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCvResponse {
    #[serde(flatten)]
    pub draft: GeneratorResponse,
    pub design_action: Option<DesignAction>,
    pub cta_text: String,
    pub skills_by_category: Vec<SkillGroup>,
}

/// POST /api/v1/cv/generate
///
/// Generates a CV draft (skills, four sections, CTA) for the target job.
pub async fn handle_generate_cv(
    State(state): State<AppState>,
    AppJson(request): AppJson<GenerateCvRequest>,
) -> Result<Json<GenerateCvResponse>, AppError> {
    let draft = generate_cv(
        state.model.as_ref(),
        &request.career_details,
        &request.target_job,
    )
    .await?;

    Ok(Json(GenerateCvResponse {
        design_action: draft.design_action(),
        cta_text: draft.cta_text(),
        skills_by_category: draft.skills_by_category(),
        draft,
    }))
}
