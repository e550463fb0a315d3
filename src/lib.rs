//! Recipe-text normalization and reconciliation engine.
//!
//! The algorithmic core of a household meal planner: canonicalizes free-form
//! ingredient text, parses quantity/unit/name structure out of ingredient
//! lines, infers dish titles from ingredient sets, reconciles recipes against
//! an inventory snapshot, and orchestrates AI recipe generation with a
//! deterministic local fallback.
//!
//! Persistence, auth, and transport live in external collaborators; every
//! operation here is a pure function of its inputs except the single awaited
//! AI call inside [`RecipeGenerator::generate`].

pub mod ai;
pub mod generate;
pub mod ingredient_parser;
pub mod normalize;
pub mod reconcile;
pub mod title;
pub mod types;

pub use generate::{build_local_recipe, RecipeGenerator};
pub use ingredient_parser::{core_name_from_line, parse_line, ParsedIngredient};
pub use normalize::{clean_token, normalize, title_case};
pub use reconcile::{
    compute_missing, compute_missing_with_quantities, in_stock_names, InventoryItem, MissingItem,
};
pub use title::infer_title;
pub use types::{
    GenerateOutcome, GenerateRequest, GeneratedRecipe, IngredientInput, RecipeMeta,
};
