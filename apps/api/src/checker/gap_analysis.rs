//! Gap analysis: asks the model which skills a job needs that the CV lacks.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::checker::course_routing::Platform;
use crate::checker::cv_input::CvInput;
use crate::checker::prompts::checker_prompt;
use crate::errors::AppError;
use crate::llm_client::schema::Schema;
use crate::llm_client::{generate_json, GenerateContentRequest, GenerativeModel, Part};

pub const CHECK_FAILED_MESSAGE: &str = "Failed to check CV gaps. Please try again.";
pub const MISSING_JD_MESSAGE: &str = "Please provide a job description.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGap {
    pub skill: String,
    pub suggested_course: String,
    pub platform: Platform,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckerResponse {
    pub skill_gaps: Vec<SkillGap>,
}

impl CheckerResponse {
    /// Gap skills grouped by platform, platforms in first-seen order.
    pub fn gaps_by_platform(&self) -> Vec<PlatformGroup> {
        let mut groups: Vec<PlatformGroup> = Vec::new();
        for gap in &self.skill_gaps {
            match groups.iter_mut().find(|g| g.platform == gap.platform) {
                Some(group) => group.skills.push(gap.skill.clone()),
                None => groups.push(PlatformGroup {
                    platform: gap.platform.clone(),
                    skills: vec![gap.skill.clone()],
                }),
            }
        }
        groups
    }
}

/// Skills to learn on one platform, as rendered by the UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformGroup {
    pub platform: Platform,
    pub skills: Vec<String>,
}

/// Trimmed job description, or the validation error shown for a blank one.
pub fn require_job_description(job_description: &str) -> Result<&str, AppError> {
    let job_description = job_description.trim();
    if job_description.is_empty() {
        return Err(AppError::Validation(MISSING_JD_MESSAGE.to_string()));
    }
    Ok(job_description)
}

/// Response schema the model must follow in Checker mode.
pub fn checker_schema() -> Schema {
    let platforms = Platform::CANONICAL
        .iter()
        .map(Platform::label)
        .collect::<Vec<_>>()
        .join(", ");

    let gap = Schema::object()
        .field("skill", Schema::string())
        .field("suggestedCourse", Schema::string())
        .field(
            "platform",
            Schema::string().describe(&format!("One of: {platforms}")),
        )
        .field("reason", Schema::string());

    Schema::object().field("skillGaps", Schema::array(gap))
}

/// Compares `cv` against `job_description`. The prompt goes first, then the CV
/// part (inline PDF or prefixed text).
pub async fn check_cv(
    model: &dyn GenerativeModel,
    cv: &CvInput,
    job_description: &str,
) -> Result<CheckerResponse, AppError> {
    let job_description = require_job_description(job_description)?;

    let request = GenerateContentRequest::structured(
        vec![Part::text(checker_prompt(job_description)), cv.to_part()],
        checker_schema(),
    );

    let report: CheckerResponse = generate_json(model, &request)
        .await
        .map_err(AppError::llm(CHECK_FAILED_MESSAGE))?;

    let off_list = report
        .skill_gaps
        .iter()
        .filter(|g| matches!(g.platform, Platform::Other(_)))
        .count();
    info!(
        "CV checked: input={}, gaps={}, off_list_platforms={}",
        cv.kind(),
        report.skill_gaps.len(),
        off_list
    );

    Ok(report)
}
