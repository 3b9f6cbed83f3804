//! improv-prompts: random improv prompt service
//!
//! Serves curated improv prompts, grouped by category, over a small JSON
//! HTTP API consumed by the browser client:
//! - `GET /api/prompts/random?category=` - one prompt picked uniformly at random
//! - `GET /api/prompts` - every prompt
//! - `GET /api/prompts/category/:category` - prompts in one category
//!
//! ## Architecture
//!
//! - **store**: `PromptStore` trait and the in-memory `MemStore` backing
//! - **server**: axum router, error mapping and server lifecycle
//! - **config**: environment-driven `ServerConfig`

// Module declarations
pub mod config;
pub mod errors;
pub mod server;
pub mod store;

pub use config::ServerConfig;
pub use errors::{PromptError, Result};
pub use server::{router, start, ServerHandle, SharedStore};
pub use store::{Category, MemStore, NewPrompt, Prompt, PromptStore};
