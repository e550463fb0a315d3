//! End-to-end tests for the recipe generation facade.
//!
//! Exercises the AI path with a fake client (success, hard failure, malformed
//! payload) and the deterministic local fallback, then reconciles the
//! generated output against an inventory snapshot.

use std::sync::Arc;

use skillet_core::ai::FakeAiClient;
use skillet_core::{
    build_local_recipe, compute_missing, GenerateRequest, InventoryItem, RecipeGenerator,
};

fn request() -> GenerateRequest {
    GenerateRequest::new(vec!["rice".to_string(), "chicken".to_string(), "broccoli".to_string()])
        .with_pantry(vec!["soy sauce".to_string(), "truffle oil".to_string()])
        .with_diet("None")
        .with_time_minutes(25)
}

const VALID_AI_JSON: &str = r#"{
    "title": "Chicken Fried Rice",
    "ingredients": ["2 cups rice", "1 lb chicken", "1 cup broccoli"],
    "steps": ["1. Cook rice.", "2. Stir-fry chicken and broccoli.", "3. Combine and serve."],
    "meta": { "diet": "None", "timeMinutes": 25 }
}"#;

#[tokio::test]
async fn ai_success_uses_ai_recipe() {
    let generator = RecipeGenerator::new(
        Arc::new(FakeAiClient::with_response(VALID_AI_JSON)),
        "openai/gpt-4o-mini",
    );

    let outcome = generator.generate(&request()).await;

    assert!(outcome.used_ai);
    assert_eq!(outcome.model_used.as_deref(), Some("openai/gpt-4o-mini"));
    assert_eq!(outcome.recipe.title, "Chicken Fried Rice");
    assert_eq!(outcome.recipe.ingredients.len(), 3);
    assert!(outcome.recipe.meta.used_ai);
    assert_eq!(outcome.recipe.meta.time_minutes, 25);
}

#[tokio::test]
async fn ai_response_fenced_in_markdown_still_parses() {
    let fenced = format!("```json\n{}\n```", VALID_AI_JSON);
    let generator = RecipeGenerator::new(
        Arc::new(FakeAiClient::with_response(&fenced)),
        "openai/gpt-4o-mini",
    );

    let outcome = generator.generate(&request()).await;

    assert!(outcome.used_ai);
    assert_eq!(outcome.recipe.title, "Chicken Fried Rice");
}

#[tokio::test]
async fn ai_hard_failure_degrades_to_local() {
    let generator = RecipeGenerator::new(
        Arc::new(FakeAiClient::failing("connection refused")),
        "openai/gpt-4o-mini",
    );

    let req = request();
    let outcome = generator.generate(&req).await;

    assert!(!outcome.used_ai);
    assert_eq!(outcome.model_used, None);
    assert!(!outcome.recipe.meta.used_ai);

    // The degraded output equals what the local generator alone produces.
    let local = build_local_recipe(
        &req.ingredients.items(),
        &["soy sauce".to_string(), "truffle oil".to_string()],
        "None",
        25,
    );
    assert_eq!(outcome.recipe, local);
}

#[tokio::test]
async fn ai_malformed_json_degrades_to_local() {
    for bad in [
        "not json at all",
        "{\"title\": \"missing everything else\"}",
        "{\"title\": 1, \"ingredients\": [], \"steps\": [], \"meta\": {}}",
    ] {
        let generator = RecipeGenerator::new(
            Arc::new(FakeAiClient::with_response(bad)),
            "openai/gpt-4o-mini",
        );
        let outcome = generator.generate(&request()).await;
        assert!(!outcome.used_ai, "expected fallback for payload {bad:?}");
        assert_eq!(outcome.model_used, None);
    }
}

#[tokio::test]
async fn local_generation_is_deterministic() {
    let generator = RecipeGenerator::local_only();
    let req = request();

    let first = generator.generate(&req).await;
    let second = generator.generate(&req).await;

    assert_eq!(first.recipe.title, second.recipe.title);
    assert_eq!(first.recipe.ingredients, second.recipe.ingredients);
    assert_eq!(first.recipe.steps, second.recipe.steps);
    assert_eq!(first.recipe.title, "Chicken Broccoli Rice Bowl");
}

#[tokio::test]
async fn local_recipe_reconciles_against_inventory() {
    let generator = RecipeGenerator::local_only();
    let outcome = generator.generate(&request()).await;

    // Bulleted recipe lines feed straight into reconciliation.
    let lines: Vec<String> = outcome
        .recipe
        .ingredients
        .iter()
        .map(|l| l.trim_start_matches('\u{2022}').trim().to_string())
        .collect();

    let inventory = vec![
        InventoryItem {
            name: "Rice".to_string(),
            done: false,
        },
        InventoryItem {
            name: "chicken thighs".to_string(),
            done: false,
        },
    ];

    let missing = compute_missing(&lines, &inventory);

    // Rice and chicken are stocked, staples are excluded; broccoli plus the
    // non-staple extras remain.
    assert!(missing.contains(&"broccoli".to_string()));
    assert!(!missing.contains(&"rice".to_string()));
    assert!(!missing.contains(&"chicken".to_string()));
    assert!(!missing.contains(&"salt".to_string()));
    assert!(!missing.contains(&"black pepper".to_string()));
}

#[tokio::test]
async fn generation_accepts_comma_separated_string() {
    let generator = RecipeGenerator::local_only();
    let req = GenerateRequest::new("peanut butter, jelly, bread");
    let outcome = generator.generate(&req).await;
    assert_eq!(outcome.recipe.title, "PB&J Sandwich");
}
