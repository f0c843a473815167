// AI drafting: layered prompt assembly (chat, document generation, review)
// plus the service that hands assembled prompts to the model.
// The assembly functions are pure; only generator.rs touches the LLM client.

pub mod builder;
pub mod context_format;
pub mod currency;
pub mod document_types;
pub mod generator;
pub mod jobs;
pub mod prompts;
pub mod review;
pub mod tone;
