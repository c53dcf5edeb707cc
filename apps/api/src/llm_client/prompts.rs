// Cross-cutting prompt fragments shared by every LLM call.
// Report-specific prompts live in recommendation::prompts.

/// System instruction sent with every recommendation request.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Persona line that opens every recommendation prompt.
pub const ADVISOR_PERSONA: &str =
    "You are an expert career and salary advisor for IT students in India.";
