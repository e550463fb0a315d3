//! Recipe generation facade.
//!
//! Tries one structured AI generation call under a strict JSON contract; any
//! failure degrades to a fully deterministic local composition. AI failure
//! never surfaces as a failure of `generate`.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Deserialize;

use crate::ai::prompts::{render_recipe_prompt, GENERATE_RECIPE_PROMPT_NAME};
use crate::ai::{AiClient, AiConfig, AiError, ChatMessage, ChatRequest, OpenRouterClient};
use crate::normalize::{clean_list, normalize};
use crate::title::{infer_title, is_bread_like, is_pasta_like, is_protein, is_rice_like, is_vegetable};
use crate::types::{GenerateOutcome, GenerateRequest, GeneratedRecipe, RecipeMeta};

/// Pantry items worth pulling into a generated recipe.
const CONDIMENT_ALLOW_LIST: &[&str] = &[
    "salt",
    "pepper",
    "black pepper",
    "olive oil",
    "butter",
    "soy sauce",
    "vinegar",
    "lemon",
    "lime",
];

/// Staples auto-added to the fallback recipe when absent.
const AUTO_STAPLES: &[&str] = &["salt", "black pepper", "olive oil"];

/// Strict JSON shape expected from the AI. Missing fields fail
/// deserialization, which counts as total failure of the call.
#[derive(Debug, Deserialize)]
struct AiRecipe {
    title: String,
    ingredients: Vec<String>,
    steps: Vec<String>,
    meta: AiRecipeMeta,
}

#[derive(Debug, Deserialize)]
struct AiRecipeMeta {
    diet: String,
    #[serde(rename = "timeMinutes")]
    time_minutes: u32,
}

/// Recipe generation facade.
///
/// The AI client and model name are injected at construction so tests can
/// substitute a fake client; `local_only` builds a generator with no AI path.
pub struct RecipeGenerator {
    ai: Option<Arc<dyn AiClient>>,
    model: String,
}

impl RecipeGenerator {
    /// Create a generator that attempts AI generation with the given client.
    pub fn new(client: Arc<dyn AiClient>, model: impl Into<String>) -> Self {
        Self {
            ai: Some(client),
            model: model.into(),
        }
    }

    /// Create a generator that always uses the local composition.
    pub fn local_only() -> Self {
        Self {
            ai: None,
            model: String::new(),
        }
    }

    /// Create a generator from environment configuration, falling back to
    /// local-only when no credential is configured.
    pub fn from_env() -> Self {
        match AiConfig::from_env() {
            Ok(config) => {
                let model = config.model.clone();
                Self::new(Arc::new(OpenRouterClient::new(config)), model)
            }
            Err(e) => {
                tracing::debug!(error = %e, "No AI credential configured, using local generation");
                Self::local_only()
            }
        }
    }

    /// Generate a recipe for the request.
    ///
    /// Exactly one AI attempt when a client is configured; on any failure the
    /// local fallback runs and the failure is logged, never propagated.
    pub async fn generate(&self, request: &GenerateRequest) -> GenerateOutcome {
        let ingredients = request.ingredients.items();
        let pantry = clean_list(&request.pantry);

        if let Some(client) = &self.ai {
            match self
                .try_ai(client.as_ref(), &ingredients, &pantry, request)
                .await
            {
                Ok(recipe) => {
                    return GenerateOutcome {
                        recipe,
                        used_ai: true,
                        model_used: Some(self.model.clone()),
                    };
                }
                Err(e) => {
                    tracing::warn!(error = %e, "AI generation failed, using local fallback");
                }
            }
        }

        let recipe = build_local_recipe(&ingredients, &pantry, &request.diet, request.time_minutes);
        GenerateOutcome {
            recipe,
            used_ai: false,
            model_used: None,
        }
    }

    async fn try_ai(
        &self,
        client: &dyn AiClient,
        ingredients: &[String],
        pantry: &[String],
        request: &GenerateRequest,
    ) -> Result<GeneratedRecipe, AiError> {
        let prompt = render_recipe_prompt(ingredients, pantry, &request.diet, request.time_minutes);

        let chat_request = ChatRequest {
            messages: vec![ChatMessage::user(prompt)],
            json_response: true,
            max_tokens: Some(1024),
            temperature: Some(0.7),
        };

        let response = client
            .complete(GENERATE_RECIPE_PROMPT_NAME, chat_request)
            .await?;

        // Models sometimes fence the JSON in a markdown code block.
        let json_text = response
            .content
            .replace("```json", "")
            .replace("```", "")
            .trim()
            .to_string();

        let parsed: AiRecipe = serde_json::from_str(&json_text)
            .map_err(|e| AiError::ParseError(format!("Invalid recipe JSON: {}", e)))?;

        Ok(GeneratedRecipe {
            title: parsed.title,
            ingredients: parsed.ingredients,
            steps: parsed.steps,
            meta: RecipeMeta {
                diet: parsed.meta.diet,
                time_minutes: parsed.meta.time_minutes,
                used_ai: true,
                model_used: Some(self.model.clone()),
            },
        })
    }
}

/// Compose the deterministic local recipe.
pub fn build_local_recipe(
    ingredients: &[String],
    pantry: &[String],
    diet: &str,
    time_minutes: u32,
) -> GeneratedRecipe {
    let title = infer_title(ingredients);

    let helpful_from_pantry: Vec<String> = pantry
        .iter()
        .filter(|item| CONDIMENT_ALLOW_LIST.contains(&normalize(item).as_str()))
        .cloned()
        .collect();

    let missing_staples: Vec<String> = AUTO_STAPLES
        .iter()
        .filter(|staple| !ingredients.iter().any(|x| normalize(x) == **staple))
        .map(|s| s.to_string())
        .collect();

    let mut seen = HashSet::new();
    let mut final_ingredients = Vec::new();
    for item in ingredients
        .iter()
        .chain(helpful_from_pantry.iter())
        .chain(missing_staples.iter())
    {
        if seen.insert(item.clone()) {
            final_ingredients.push(item.clone());
        }
    }

    let norm: Vec<String> = ingredients.iter().map(|x| normalize(x)).collect();
    let has_rice = norm.iter().any(|n| is_rice_like(n));
    let has_pasta = norm.iter().any(|n| is_pasta_like(n));
    let has_bread = norm.iter().any(|n| is_bread_like(n));
    let protein = norm.iter().find(|n| is_protein(n));
    let veg = norm.iter().find(|n| is_vegetable(n));

    let mut steps = Vec::new();
    steps.push("Prep ingredients and heat a pan over medium heat.".to_string());

    if has_rice {
        steps.push("Cook rice (or warm leftover rice).".to_string());
    }
    if has_pasta {
        steps.push("Boil pasta/noodles until al dente, then drain.".to_string());
    }
    if has_bread {
        steps.push("Toast bread/wrap lightly (optional).".to_string());
    }

    if let Some(protein) = protein {
        steps.push(format!(
            "Cook the {} with oil, salt, and pepper until done.",
            protein
        ));
    }
    if let Some(veg) = veg {
        steps.push(format!("Add the {} and cook until tender.", veg));
    }
    steps.push("Combine everything, adjust seasoning, and serve.".to_string());

    GeneratedRecipe {
        title,
        ingredients: final_ingredients
            .into_iter()
            .map(|x| format!("\u{2022} {}", x))
            .collect(),
        steps: steps
            .into_iter()
            .enumerate()
            .map(|(i, s)| format!("{}. {}", i + 1, s))
            .collect(),
        meta: RecipeMeta {
            diet: diet.to_string(),
            time_minutes,
            used_ai: false,
            model_used: None,
        },
    }
}
