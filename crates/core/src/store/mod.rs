//! Prompt storage
//!
//! `PromptStore` is the seam between the HTTP layer and whatever holds the
//! prompts. `MemStore` is the in-memory backing used by the server.

use async_trait::async_trait;

use crate::errors::Result;

pub mod memory;
pub mod prompts;
pub mod seed;

pub use memory::MemStore;
pub use prompts::{Category, NewPrompt, Prompt};

/// Category-scoped access to a collection of prompts
#[async_trait]
pub trait PromptStore: Send + Sync {
    /// Pick one prompt uniformly at random
    ///
    /// `None` and `Some(Category::Mixed)` both select from every prompt.
    /// Fails with `PromptError::EmptyCandidateSet` when nothing qualifies.
    async fn get_random(&self, category: Option<Category>) -> Result<Prompt>;

    /// Every stored prompt, in insertion order
    async fn get_all(&self) -> Result<Vec<Prompt>>;

    /// Prompts whose category is exactly `category`
    async fn get_by_category(&self, category: Category) -> Result<Vec<Prompt>>;

    /// Insert a new prompt with a generated id and timestamp
    async fn create(&self, prompt: NewPrompt) -> Result<Prompt>;
}
