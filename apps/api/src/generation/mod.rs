// Question generation: request validation, prompt construction and the
// model-backed generator behind POST /api/generate.
// All LLM calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod request;
