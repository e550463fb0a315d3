//! Shared data model for recipe generation.

use serde::{Deserialize, Serialize};

use crate::normalize::{clean_list, split_free_form};

/// Ingredient input as supplied by callers: either a comma-separated string
/// or an explicit list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IngredientInput {
    Text(String),
    List(Vec<String>),
}

impl IngredientInput {
    /// Cleaned, deduplicated ingredient entries in input order.
    pub fn items(&self) -> Vec<String> {
        match self {
            IngredientInput::Text(text) => split_free_form(text),
            IngredientInput::List(list) => clean_list(list),
        }
    }
}

impl From<&str> for IngredientInput {
    fn from(text: &str) -> Self {
        IngredientInput::Text(text.to_string())
    }
}

impl From<Vec<String>> for IngredientInput {
    fn from(list: Vec<String>) -> Self {
        IngredientInput::List(list)
    }
}

fn default_diet() -> String {
    "None".to_string()
}

fn default_time_minutes() -> u32 {
    30
}

/// A recipe generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub ingredients: IngredientInput,
    #[serde(default)]
    pub pantry: Vec<String>,
    #[serde(default = "default_diet")]
    pub diet: String,
    #[serde(default = "default_time_minutes")]
    pub time_minutes: u32,
}

impl GenerateRequest {
    pub fn new(ingredients: impl Into<IngredientInput>) -> Self {
        Self {
            ingredients: ingredients.into(),
            pantry: Vec::new(),
            diet: default_diet(),
            time_minutes: default_time_minutes(),
        }
    }

    pub fn with_pantry(mut self, pantry: Vec<String>) -> Self {
        self.pantry = pantry;
        self
    }

    pub fn with_diet(mut self, diet: impl Into<String>) -> Self {
        self.diet = diet.into();
        self
    }

    pub fn with_time_minutes(mut self, time_minutes: u32) -> Self {
        self.time_minutes = time_minutes;
        self
    }
}

/// Generation metadata persisted alongside the recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeMeta {
    pub diet: String,
    pub time_minutes: u32,
    #[serde(rename = "usedAI")]
    pub used_ai: bool,
    pub model_used: Option<String>,
}

/// A generated recipe, immutable after creation. Persisted verbatim by the
/// storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub meta: RecipeMeta,
}

/// Result of one generation request, recording which path produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOutcome {
    pub recipe: GeneratedRecipe,
    #[serde(rename = "usedAI")]
    pub used_ai: bool,
    pub model_used: Option<String>,
}
