//! Missing-item reconciliation.
//!
//! Compares a recipe's ingredient lines against an inventory snapshot and
//! produces the deduplicated, ordered list of items to shop for.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::ingredient_parser::parse_line;
use crate::normalize::{clean_token, normalize};

/// One inventory record at reconciliation time.
///
/// `done == false` means "in stock"; checking an item marks it used up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    pub done: bool,
}

/// A missing ingredient with the quantity parsed from its recipe line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingItem {
    pub name: String,
    /// Display quantity from the recipe line, empty when none was parsed.
    pub display_qty: String,
}

/// Pantry items never worth shopping for.
const STAPLE_EXCLUSIONS: &[&str] = &["salt", "pepper", "black pepper", "water"];

/// Names of inventory entries currently in stock (`done == false`), in order,
/// blanks dropped. This is the pantry list handed to recipe generation.
pub fn in_stock_names(inventory: &[InventoryItem]) -> Vec<String> {
    inventory
        .iter()
        .filter(|item| !item.done && !item.name.trim().is_empty())
        .map(|item| item.name.clone())
        .collect()
}

fn in_stock_core_names(inventory: &[InventoryItem]) -> HashSet<String> {
    inventory
        .iter()
        .filter(|item| !item.done)
        .map(|item| normalize(&item.name))
        .filter(|core| !core.is_empty())
        .collect()
}

/// A core name counts as present when it equals an in-stock core name or when
/// either contains the other. The symmetric containment handles "pepper" vs
/// "black pepper" in both directions; it also accepts "pea" inside "peanut",
/// an inherited ambiguity the tests pin down rather than fix.
fn is_in_stock(core: &str, in_stock: &HashSet<String>) -> bool {
    if in_stock.contains(core) {
        return true;
    }
    in_stock
        .iter()
        .any(|stocked| stocked.contains(core) || core.contains(stocked))
}

/// Compute the recipe ingredients missing from inventory, with quantities.
///
/// Pure function of its inputs: no persistence lookups. Each line's core name
/// is derived through the line parser and normalizer; empty core names and
/// staples are skipped, and output is deduplicated preserving first
/// occurrence. The emitted name is the cleaned parsed name, not the fully
/// normalized form.
pub fn compute_missing_with_quantities(
    recipe_lines: &[String],
    inventory: &[InventoryItem],
) -> Vec<MissingItem> {
    let in_stock = in_stock_core_names(inventory);

    let mut seen = HashSet::new();
    let mut missing = Vec::new();
    for line in recipe_lines {
        let parsed = parse_line(line);
        let core = normalize(&parsed.name);
        if core.is_empty() {
            continue;
        }
        if STAPLE_EXCLUSIONS.contains(&core.as_str()) {
            continue;
        }
        if is_in_stock(&core, &in_stock) {
            continue;
        }

        let display = clean_token(&parsed.name);
        if display.is_empty() {
            continue;
        }
        if seen.insert(display.clone()) {
            missing.push(MissingItem {
                name: display,
                display_qty: parsed.display_qty,
            });
        }
    }

    missing
}

/// Compute the names of recipe ingredients missing from inventory.
pub fn compute_missing(recipe_lines: &[String], inventory: &[InventoryItem]) -> Vec<String> {
    compute_missing_with_quantities(recipe_lines, inventory)
        .into_iter()
        .map(|item| item.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn stocked(names: &[&str]) -> Vec<InventoryItem> {
        names
            .iter()
            .map(|n| InventoryItem {
                name: n.to_string(),
                done: false,
            })
            .collect()
    }

    #[test]
    fn test_missing_when_not_in_inventory() {
        let missing = compute_missing(&lines(&["2 lbs chicken breast"]), &[]);
        assert_eq!(missing, vec!["chicken breast"]);
    }

    #[test]
    fn test_fuzzy_containment_both_directions() {
        // "pepper" is contained in stocked "black pepper".
        let missing = compute_missing(&lines(&["1 tsp pepper"]), &stocked(&["Black Pepper"]));
        assert!(missing.is_empty());

        // Stocked "pepper" is contained in "red pepper".
        let missing = compute_missing(&lines(&["1 red pepper"]), &stocked(&["pepper"]));
        assert!(missing.is_empty());
    }

    #[test]
    fn test_staples_always_excluded() {
        let missing = compute_missing(
            &lines(&["salt", "black pepper", "water", "1 cup flour"]),
            &[],
        );
        assert_eq!(missing, vec!["flour"]);
    }

    #[test]
    fn test_done_items_are_out_of_stock() {
        let inventory = vec![InventoryItem {
            name: "flour".to_string(),
            done: true,
        }];
        let missing = compute_missing(&lines(&["2 cups flour"]), &inventory);
        assert_eq!(missing, vec!["flour"]);
    }

    #[test]
    fn test_dedupe_preserves_first_occurrence_order() {
        let missing = compute_missing(
            &lines(&["1 cup flour", "eggs", "2 cups flour", "milk"]),
            &[],
        );
        assert_eq!(missing, vec!["flour", "eggs", "milk"]);
    }

    #[test]
    fn test_quantities_carried_for_shopping() {
        let missing = compute_missing_with_quantities(&lines(&["2 cups flour", "milk"]), &[]);
        assert_eq!(missing[0].name, "flour");
        assert_eq!(missing[0].display_qty, "2 cups");
        assert_eq!(missing[1].display_qty, "");
    }

    #[test]
    fn test_empty_lines_and_empty_inventory() {
        assert!(compute_missing(&[], &[]).is_empty());
        assert!(compute_missing(&lines(&["", "  ", "(optional)"]), &[]).is_empty());
    }

    #[test]
    fn test_in_stock_names() {
        let inventory = vec![
            InventoryItem {
                name: "eggs".to_string(),
                done: false,
            },
            InventoryItem {
                name: "flour".to_string(),
                done: true,
            },
            InventoryItem {
                name: "  ".to_string(),
                done: false,
            },
        ];
        assert_eq!(in_stock_names(&inventory), vec!["eggs"]);
    }

    #[test]
    fn test_known_substring_ambiguity() {
        // Inherited heuristic: stocked "pea" is a substring of "peanut
        // butter", so peanut butter is treated as present even though it
        // isn't. Pinned here, not fixed.
        let missing = compute_missing(&lines(&["1 cup peanut butter"]), &stocked(&["pea"]));
        assert!(missing.is_empty());
    }
}
