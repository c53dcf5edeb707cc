// Recommendation collaborator: prompt construction plus the two transports
// (in-process GroqCloud call, or POST /recommend on a remote backend).
// All LLM calls go through llm_client.

pub mod handlers;
pub mod prompts;
pub mod service;
