//! CV draft: turns free-text career details into a structured CV outline.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generator::prompts::{generator_prompt, DESIGN_CTA_TOKEN};
use crate::llm_client::schema::Schema;
use crate::llm_client::{generate_json, GenerateContentRequest, GenerativeModel, Part};

pub const GENERATE_FAILED_MESSAGE: &str = "Failed to generate career strategy. Please try again.";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillItem {
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyProject {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub role: String,
    pub bullet_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvSections {
    pub professional_summary: String,
    pub core_competencies: Vec<String>,
    pub key_projects: Vec<KeyProject>,
    pub experience: Vec<ExperienceEntry>,
}

/// The model's reply in Generator mode. Field names match the response schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorResponse {
    pub suggested_skills: Vec<SkillItem>,
    pub cv_sections: CvSections,
    pub cta: String,
    pub canva_logic: String,
}

/// Button the UI renders in place of a `[UI_BUTTON: ...]` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DesignAction {
    DesignWithCanva,
}

impl DesignAction {
    fn from_token_name(name: &str) -> Option<Self> {
        match name {
            "DESIGN_WITH_CANVA" => Some(DesignAction::DesignWithCanva),
            _ => None,
        }
    }
}

impl GeneratorResponse {
    /// The button requested by the `cta` text, if it carries a known token.
    pub fn design_action(&self) -> Option<DesignAction> {
        ui_button_name(&self.cta).and_then(DesignAction::from_token_name)
    }

    /// `cta` with the button token removed, for display next to the button.
    pub fn cta_text(&self) -> String {
        match ui_button_span(&self.cta) {
            Some((start, end)) => {
                let mut text = String::with_capacity(self.cta.len());
                text.push_str(self.cta[..start].trim_end());
                let rest = self.cta[end..].trim_start();
                if !text.is_empty() && !rest.is_empty() {
                    text.push(' ');
                }
                text.push_str(rest);
                text
            }
            None => self.cta.trim().to_string(),
        }
    }

    /// Skills grouped by category, categories in first-seen order.
    pub fn skills_by_category(&self) -> Vec<SkillGroup> {
        let mut groups: Vec<SkillGroup> = Vec::new();
        for skill in &self.suggested_skills {
            let category = skill.category.trim();
            match groups
                .iter_mut()
                .find(|g| g.category.eq_ignore_ascii_case(category))
            {
                Some(group) => group.skills.push(skill.name.clone()),
                None => groups.push(SkillGroup {
                    category: category.to_string(),
                    skills: vec![skill.name.clone()],
                }),
            }
        }
        groups
    }
}

/// One category of suggested skills, as rendered by the UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
}

/// Byte range of the first `[UI_BUTTON: ...]` token.
fn ui_button_span(text: &str) -> Option<(usize, usize)> {
    let start = text.find("[UI_BUTTON:")?;
    let len = text[start..].find(']')? + 1;
    Some((start, start + len))
}

fn ui_button_name(text: &str) -> Option<&str> {
    let (start, end) = ui_button_span(text)?;
    Some(text[start + "[UI_BUTTON:".len()..end - 1].trim())
}

/// Response schema the model must follow in Generator mode.
pub fn generator_schema() -> Schema {
    let skill = Schema::object()
        .field("name", Schema::string())
        .field("category", Schema::string());

    let project = Schema::object()
        .field("title", Schema::string())
        .field("description", Schema::string());

    let experience = Schema::object()
        .field("role", Schema::string())
        .field("bulletPoints", Schema::string_array());

    let sections = Schema::object()
        .field("professionalSummary", Schema::string())
        .field("coreCompetencies", Schema::string_array())
        .field("keyProjects", Schema::array(project))
        .field("experience", Schema::array(experience));

    Schema::object()
        .field("suggestedSkills", Schema::array(skill))
        .field("cvSections", sections)
        .field("cta", Schema::string())
        .field("canvaLogic", Schema::string())
}

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

/// Asks the model for a CV draft. Both inputs must be non-blank; nothing is
/// sent otherwise.
pub async fn generate_cv(
    model: &dyn GenerativeModel,
    career_details: &str,
    target_job: &str,
) -> Result<GeneratorResponse, AppError> {
    let career_details = career_details.trim();
    let target_job = target_job.trim();

    if career_details.is_empty() {
        return Err(AppError::Validation(
            "Please describe your career details.".to_string(),
        ));
    }
    if target_job.is_empty() {
        return Err(AppError::Validation(
            "Please provide a target job.".to_string(),
        ));
    }

    let request = GenerateContentRequest::structured(
        vec![Part::text(generator_prompt(career_details, target_job))],
        generator_schema(),
    );

    let draft: GeneratorResponse = generate_json(model, &request)
        .await
        .map_err(AppError::llm(GENERATE_FAILED_MESSAGE))?;

    info!(
        "CV draft generated: skills={}, projects={}, roles={}, cta_token={}",
        draft.suggested_skills.len(),
        draft.cv_sections.key_projects.len(),
        draft.cv_sections.experience.len(),
        draft.cta.contains(DESIGN_CTA_TOKEN)
    );

    Ok(draft)
}
