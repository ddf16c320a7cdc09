//! Provider Adapters
//!
//! Concrete completion providers for external LLM backends.

mod openai;

pub use openai::{OpenAiProvider, OpenAiSettings};
