// Primary variant: profile in, AI-written suggestion out.
// All LLM calls go through llm_client.

pub mod handlers;
pub mod models;
pub mod profile;
pub mod prompts;
