//! Prompt template for structured recipe generation.

/// Prompt name for logging.
pub const GENERATE_RECIPE_PROMPT_NAME: &str = "generate_recipe";

/// Render the strict-JSON recipe generation prompt.
pub fn render_recipe_prompt(
    ingredients: &[String],
    pantry: &[String],
    diet: &str,
    time_minutes: u32,
) -> String {
    format!(
        r#"Return STRICT JSON ONLY.

{{
  "title": string,
  "ingredients": string[],
  "steps": string[],
  "meta": {{ "diet": string, "timeMinutes": number }}
}}

Rules:
- Use the provided ingredients (do not invent a different dish).
- You may add basic staples (salt, pepper, oil, water) and pantry items listed.
- Title should NOT include commentary like "(Simple Recipe)" or jokes.

Ingredients: {ingredients}
Pantry: {pantry}
Diet: {diet}
Time: {time_minutes}"#,
        ingredients = serde_json::json!(ingredients),
        pantry = serde_json::json!(pantry),
        diet = diet,
        time_minutes = time_minutes,
    )
}
