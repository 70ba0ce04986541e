// Result generation: mock rule tables, the deterministic generator, prompt building,
// verdict validation for LLM output, and the diagnoser that picks between them.
// All LLM calls go through llm_client.

pub mod diagnoser;
pub mod handlers;
pub mod mock_data;
pub mod mock_rules;
pub mod prompts;
pub mod share;
pub mod verdict;
