// Generator mode: free-text career details in, structured CV draft out.
// All LLM calls go through llm_client.

pub mod cv_draft;
pub mod handlers;
pub mod prompts;
