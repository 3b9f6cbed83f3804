use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::PromptError;

/// Prompt grouping
///
/// `Mixed` is a real value that a prompt may carry, but random selection
/// treats it as "any category".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Scenarios,
    Characters,
    Props,
    Mixed,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Scenarios,
        Category::Characters,
        Category::Props,
        Category::Mixed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Scenarios => "scenarios",
            Category::Characters => "characters",
            Category::Props => "props",
            Category::Mixed => "mixed",
        }
    }

    /// Parse an optional untrusted value, dropping anything unrecognized
    pub fn parse_lenient(value: Option<&str>) -> Option<Category> {
        value.and_then(|v| v.parse().ok())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match against the four names
impl FromStr for Category {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scenarios" => Ok(Category::Scenarios),
            "characters" => Ok(Category::Characters),
            "props" => Ok(Category::Props),
            "mixed" => Ok(Category::Mixed),
            other => Err(PromptError::InvalidCategory(other.to_string())),
        }
    }
}

/// A stored prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id:               Uuid,
    pub content:          String,
    pub category:         Category,
    pub special_elements: Vec<String>,
    pub created_at:       DateTime<Utc>,
}

/// Input to `PromptStore::create`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPrompt {
    pub content:          String,
    pub category:         Category,
    #[serde(default)]
    pub special_elements: Vec<String>,
}

impl NewPrompt {
    pub fn new<S: Into<String>>(content: S, category: Category) -> Self {
        Self {
            content: content.into(),
            category,
            special_elements: Vec::new(),
        }
    }

    pub fn with_elements<I, S>(mut self, elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.special_elements = elements.into_iter().map(Into::into).collect();
        self
    }

    /// Stamp a fresh id and creation time
    pub(crate) fn into_prompt(self) -> Prompt {
        Prompt {
            id:               Uuid::new_v4(),
            content:          self.content,
            category:         self.category,
            special_elements: self.special_elements,
            created_at:       Utc::now(),
        }
    }
}
