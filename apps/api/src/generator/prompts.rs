// Prompt text for Generator mode.

use crate::llm_client::prompts::Mode;

/// Call-to-action token the model is told to end with. The UI swaps it for a
/// design button.
pub const DESIGN_CTA_TOKEN: &str = "[UI_BUTTON: DESIGN_WITH_CANVA]";

/// Builds the generator prompt. User text is inlined verbatim.
pub fn generator_prompt(career_details: &str, target_job: &str) -> String {
    format!(
        "{} Career Details: {career_details}. Target Job: {target_job}. \
         Generate 5-7 high-impact skills and 4 essential CV sections. \
         End with CTA: {DESIGN_CTA_TOKEN} and explain the logic.",
        Mode::Generator
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_prompt_exact_text() {
        assert_eq!(
            generator_prompt("5 years backend in Go", "Staff Engineer"),
            "Mode: [GENERATOR]. Career Details: 5 years backend in Go. Target Job: Staff Engineer. \
             Generate 5-7 high-impact skills and 4 essential CV sections. \
             End with CTA: [UI_BUTTON: DESIGN_WITH_CANVA] and explain the logic."
        );
    }

    #[test]
    fn test_generator_prompt_does_not_expand_braces_in_user_text() {
        let prompt = generator_prompt("wrote {target_job} parser", "SRE");
        assert!(prompt.contains("Career Details: wrote {target_job} parser."));
    }
}
