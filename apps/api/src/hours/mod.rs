// Hours parsing: prompt contract, model output validation, and the JSON API.
// All model calls go through llm_client; no direct OpenAI calls here.

pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod validation;
