//! In-memory prompt store
//!
//! Prompts live in a `Vec` in insertion order with an id index beside it.
//! Writers take the lock exclusively and only ever append, so readers
//! always see whole records.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use async_trait::async_trait;
use rand::seq::IndexedRandom;
use uuid::Uuid;

use super::{seed, Category, NewPrompt, Prompt, PromptStore};
use crate::errors::{PromptError, Result};

#[derive(Default)]
struct Inner {
    prompts: Vec<Prompt>,
    by_id:   HashMap<Uuid, usize>,
}

impl Inner {
    fn insert(&mut self, prompt: Prompt) {
        self.by_id.insert(prompt.id, self.prompts.len());
        self.prompts.push(prompt);
    }
}

/// Cheaply cloneable handle to a shared in-memory collection
#[derive(Clone, Default)]
pub struct MemStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the built-in seed prompts
    pub fn seeded() -> Self {
        Self::with_prompts(seed::seed_prompts())
    }

    /// Create a store from arbitrary initial prompts
    pub fn with_prompts<I>(prompts: I) -> Self
    where
        I: IntoIterator<Item = NewPrompt>,
    {
        let mut inner = Inner::default();
        for prompt in prompts {
            inner.insert(prompt.into_prompt());
        }
        tracing::debug!(count = inner.prompts.len(), "Loaded initial prompts");

        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }

    /// Look up a prompt by id
    pub fn get(&self, id: &Uuid) -> Result<Option<Prompt>> {
        let inner = self.read()?;
        Ok(inner.by_id.get(id).map(|&idx| inner.prompts[idx].clone()))
    }

    /// Number of stored prompts
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.prompts.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|_| PromptError::Store("prompt store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| PromptError::Store("prompt store lock poisoned".into()))
    }

    fn snapshot<F>(&self, keep: F) -> Result<Vec<Prompt>>
    where
        F: Fn(&Prompt) -> bool,
    {
        let inner = self.read()?;
        Ok(inner.prompts.iter().filter(|p| keep(p)).cloned().collect())
    }
}

/// Uniform pick over `candidates`
fn choose_uniform(candidates: &[&Prompt]) -> Option<Prompt> {
    let mut rng = rand::rng();
    candidates.choose(&mut rng).map(|p| (*p).clone())
}

#[async_trait]
impl PromptStore for MemStore {
    async fn get_random(&self, category: Option<Category>) -> Result<Prompt> {
        let filter = category.filter(|c| *c != Category::Mixed);

        let inner = self.read()?;
        let candidates: Vec<&Prompt> = inner
            .prompts
            .iter()
            .filter(|p| filter.map_or(true, |c| p.category == c))
            .collect();

        choose_uniform(&candidates).ok_or_else(|| {
            let label = category.map_or("any", |c| c.as_str());
            PromptError::EmptyCandidateSet(label.to_string())
        })
    }

    async fn get_all(&self) -> Result<Vec<Prompt>> {
        self.snapshot(|_| true)
    }

    async fn get_by_category(&self, category: Category) -> Result<Vec<Prompt>> {
        self.snapshot(|p| p.category == category)
    }

    async fn create(&self, prompt: NewPrompt) -> Result<Prompt> {
        let prompt = prompt.into_prompt();

        let mut inner = self.write()?;
        inner.insert(prompt.clone());
        tracing::debug!(id = %prompt.id, category = %prompt.category, "Created prompt");

        Ok(prompt)
    }
}
