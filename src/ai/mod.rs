//! AI client module for LLM integration via an OpenAI-compatible API.
//!
//! Provides the `AiClient` capability trait, the `OpenRouterClient`
//! implementation, explicit configuration, and a fake client for tests.

mod client;
mod config;
mod fake;
pub mod prompts;
mod types;

pub use client::{AiClient, AiError, OpenRouterClient};
pub use config::{AiConfig, ConfigError, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use fake::FakeAiClient;
pub use types::{ChatMessage, ChatRequest, ChatResponse, Role};
