// Prompt text for Checker mode.

use crate::checker::course_routing::routing_clause;
use crate::llm_client::prompts::Mode;

/// Prefix for a pasted CV, sent as its own text part after the prompt.
pub const CV_TEXT_PREFIX: &str = "CV Text: ";

/// Builds the checker prompt. The job description is inlined verbatim.
pub fn checker_prompt(job_description: &str) -> String {
    format!(
        "{} Analyze the provided CV against this Job Description: {job_description}. \
         Identify critical skill gaps. Suggest courses based on: {}.",
        Mode::Checker,
        routing_clause()
    )
}
