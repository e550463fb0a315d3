//! Ingredient line parsing.
//!
//! Splits raw ingredient lines (e.g., "2 cups chicken breast, diced") into
//! quantity / unit / name structure.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::normalize;

/// Parsed ingredient structure.
///
/// `name` is never empty when the source line is non-empty. When no quantity
/// is detected (or the quantity split is rejected by the unit guard), `name`
/// holds the whole cleaned line and `quantity`/`unit`/`display_qty` are empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    pub quantity: String,
    pub unit: String,
    pub name: String,
    /// `"{quantity} {unit}"` trimmed; empty when no quantity was parsed.
    pub display_qty: String,
}

/// Recognized measurement units (lowercase for matching).
const UNITS: &[&str] = &[
    "tsp", "tbsp", "cup", "cups", "oz", "lb", "lbs", "g", "kg", "ml", "l", "pinch", "clove",
    "cloves", "slice", "slices", "can", "cans", "bunch", "sprig", "sprigs",
];

/// Leading quantity grammar: integer, decimal, simple fraction, or mixed
/// number, optionally followed by a unit-like word, then the remainder.
static QUANTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?(?:\s*\d/\d)?|\d/\d)\s*([a-zA-Z]+)?\s*(.*)$").unwrap()
});

static PAREN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\([^)]*\)").unwrap());

static OPTIONAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\boptional\b").unwrap());

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static OF_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^of\s+").unwrap());

/// Trailing preparation-descriptor clause, dropped from the name when a
/// quantity and valid unit were found.
static PREP_CLAUSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i),\s*(chopped|diced|minced|sliced|grated|juiced).*$").unwrap());

fn is_unit(word: &str) -> bool {
    let lower = word.to_lowercase();
    UNITS.contains(&lower.as_str())
}

/// Parse a raw ingredient line into quantity / unit / name.
///
/// Parenthetical spans and the word `optional` are stripped before grammar
/// matching. If a quantity is found but the following word is not a
/// recognized unit, the split is discarded and the whole cleaned line becomes
/// the name, so a brand name or adjective mistaken for a unit never corrupts
/// the parse.
pub fn parse_line(raw: &str) -> ParsedIngredient {
    let mut s = raw.trim().to_string();
    if s.is_empty() {
        return unquantified(String::new());
    }

    s = PAREN_RE.replace_all(&s, " ").trim().to_string();
    s = OPTIONAL_RE.replace_all(&s, "").to_string();
    s = WHITESPACE_RE.replace_all(&s, " ").trim().to_string();

    let Some(caps) = QUANTITY_RE.captures(&s) else {
        return unquantified(s);
    };

    let quantity = caps.get(1).map_or("", |m| m.as_str()).trim().to_string();
    let unit = caps.get(2).map_or("", |m| m.as_str()).trim().to_string();
    let mut rest = caps.get(3).map_or("", |m| m.as_str()).trim().to_string();

    rest = OF_PREFIX_RE.replace(&rest, "").trim().to_string();
    if rest.is_empty() {
        return unquantified(s);
    }

    if !unit.is_empty() && !is_unit(&unit) {
        return unquantified(s);
    }

    rest = PREP_CLAUSE_RE.replace(&rest, "").trim().to_string();

    let display_qty = if unit.is_empty() {
        quantity.clone()
    } else {
        format!("{} {}", quantity, unit)
    };

    ParsedIngredient {
        quantity,
        unit,
        name: rest,
        display_qty,
    }
}

fn unquantified(name: String) -> ParsedIngredient {
    ParsedIngredient {
        quantity: String::new(),
        unit: String::new(),
        name,
        display_qty: String::new(),
    }
}

/// Derive the core matching name for a raw ingredient line: strip the
/// quantity/unit/preparation clause, then normalize.
pub fn core_name_from_line(raw: &str) -> String {
    normalize::normalize(&parse_line(raw).name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_quantity_and_unit() {
        let result = parse_line("2 cups flour");
        assert_eq!(result.quantity, "2");
        assert_eq!(result.unit, "cups");
        assert_eq!(result.name, "flour");
        assert_eq!(result.display_qty, "2 cups");
    }

    #[test]
    fn test_descriptor_clause_stripped() {
        let result = parse_line("1 cup onion, diced");
        assert_eq!(result.name, "onion");
        assert_eq!(result.display_qty, "1 cup");
    }

    #[test]
    fn test_unit_guard_rejects_non_units() {
        // "purple" is not a unit, so the quantity split is discarded.
        let result = parse_line("2 purple unicorns of joy");
        assert_eq!(result.quantity, "");
        assert_eq!(result.unit, "");
        assert_eq!(result.name, "2 purple unicorns of joy");
        assert_eq!(result.display_qty, "");
    }

    #[test]
    fn test_of_connector() {
        let result = parse_line("2 cups of flour");
        assert_eq!(result.name, "flour");
        assert_eq!(result.display_qty, "2 cups");
    }

    #[test]
    fn test_fraction() {
        let result = parse_line("1/2 tsp vanilla");
        assert_eq!(result.quantity, "1/2");
        assert_eq!(result.unit, "tsp");
        assert_eq!(result.name, "vanilla");
    }

    #[test]
    fn test_mixed_number() {
        let result = parse_line("1 1/2 cups water");
        assert_eq!(result.quantity, "1 1/2");
        assert_eq!(result.unit, "cups");
        assert_eq!(result.name, "water");
    }

    #[test]
    fn test_quantity_only_word_becomes_name() {
        // The grammar consumes "eggs" as a candidate unit, leaving nothing
        // behind, so the whole line stays un-quantified.
        let result = parse_line("3 eggs");
        assert_eq!(result.quantity, "");
        assert_eq!(result.name, "3 eggs");
    }

    #[test]
    fn test_parenthetical_and_optional_stripped() {
        let result = parse_line("1 cup cheese (shredded) optional");
        assert_eq!(result.name, "cheese");
        assert_eq!(result.display_qty, "1 cup");
    }

    #[test]
    fn test_no_quantity() {
        let result = parse_line("salt");
        assert_eq!(result.quantity, "");
        assert_eq!(result.name, "salt");
    }

    #[test]
    fn test_empty_line() {
        let result = parse_line("   ");
        assert_eq!(result.name, "");
        assert_eq!(result.display_qty, "");
    }

    #[test]
    fn test_core_name_from_line() {
        assert_eq!(core_name_from_line("2 lbs Chicken Breast, diced"), "chicken breast");
        assert_eq!(core_name_from_line("1 tsp pepper"), "pepper");
        assert_eq!(core_name_from_line(""), "");
    }
}
