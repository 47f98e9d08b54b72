// Checker mode: compares a CV (text or PDF) against a job description and
// reports skill gaps with course recommendations.
// All LLM calls go through llm_client.

pub mod course_routing;
pub mod cv_input;
pub mod gap_analysis;
pub mod handlers;
pub mod prompts;
