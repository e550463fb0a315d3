//! Recipe title inference.
//!
//! Derives a human-meaningful dish title from an ingredient set by running an
//! ordered cascade of dish-shape rules. The first matching rule wins; rule
//! order is part of the contract, so the cascade is an explicit table rather
//! than nested conditionals.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::normalize::{clean_list, normalize, title_case};

static BREAD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(bread|bun|roll|bagel|tortilla|wrap|pita)\b").unwrap());

static RICE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(rice|quinoa|couscous)\b").unwrap());

static PASTA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(pasta|noodles)\b").unwrap());

static PROTEIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(chicken|turkey|beef|pork|salmon|tuna|shrimp|tofu|tempeh|beans|lentils|egg|eggs)\b")
        .unwrap()
});

static VEG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(broccoli|spinach|kale|lettuce|pepper|peppers|onion|garlic|tomato|carrot|zucchini|cucumber|mushroom)\b",
    )
    .unwrap()
});

static PASTA_PROTEIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(chicken|shrimp|tuna|salmon|tofu|beans|lentils)\b").unwrap());

static PASTA_VEG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(broccoli|spinach|tomato|mushroom|pepper|onion|garlic|zucchini)\b").unwrap()
});

static RICE_PROTEIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(chicken|beef|pork|salmon|tuna|shrimp|tofu|beans|lentils)\b").unwrap()
});

static RICE_VEG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(broccoli|spinach|pepper|onion|tomato|carrot|zucchini|mushroom)\b").unwrap()
});

static SANDWICH_PROTEIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(chicken|turkey|beef|pork|tuna|salmon|tofu|beans|egg|eggs)\b").unwrap()
});

static SANDWICH_VEG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(lettuce|tomato|onion|cucumber|pepper|spinach)\b").unwrap());

static CARB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(rice|quinoa|oats|potato|potatoes)\b").unwrap());

/// Whether a core name mentions a bread-like carrier (bread, wrap, pita, ...).
pub fn is_bread_like(core: &str) -> bool {
    BREAD_RE.is_match(core)
}

/// Whether a core name mentions a rice-like base (rice, quinoa, couscous).
pub fn is_rice_like(core: &str) -> bool {
    RICE_RE.is_match(core)
}

/// Whether a core name mentions pasta or noodles.
pub fn is_pasta_like(core: &str) -> bool {
    PASTA_RE.is_match(core)
}

/// Whether a core name mentions a protein term.
pub fn is_protein(core: &str) -> bool {
    PROTEIN_RE.is_match(core)
}

/// Whether a core name mentions a vegetable term.
pub fn is_vegetable(core: &str) -> bool {
    VEG_RE.is_match(core)
}

/// Ingredient view shared by all cascade rules.
struct TitleContext {
    /// Cleaned display entries, in input order.
    raw: Vec<String>,
    /// Normalized core names, empties dropped.
    norm: Vec<String>,
    /// Exact-membership set over `norm`.
    set: HashSet<String>,
}

impl TitleContext {
    fn new(ingredients: &[String]) -> Self {
        let raw = clean_list(ingredients);
        let norm: Vec<String> = raw
            .iter()
            .map(|entry| normalize(entry))
            .filter(|n| !n.is_empty())
            .collect();
        let set = norm.iter().cloned().collect();
        Self { raw, norm, set }
    }

    fn has(&self, token: &str) -> bool {
        self.set.contains(token)
    }

    fn has_any(&self, tokens: &[&str]) -> bool {
        tokens.iter().any(|t| self.has(t))
    }

    fn any_matches(&self, re: &Regex) -> bool {
        self.norm.iter().any(|n| re.is_match(n))
    }

    /// First normalized entry matching the term-class regex, title-cased for
    /// display. Returns the whole entry, not just the matched word.
    fn pick(&self, re: &Regex) -> Option<String> {
        self.norm.iter().find(|n| re.is_match(n)).map(|n| title_case(n))
    }
}

/// One dish-shape rule: returns a title when its pattern applies.
struct TitleRule {
    name: &'static str,
    apply: fn(&TitleContext) -> Option<String>,
}

/// The cascade, highest priority first.
const RULES: &[TitleRule] = &[
    TitleRule {
        name: "pbj",
        apply: |ctx| {
            if !(ctx.has("peanut butter") && ctx.has_any(&["jelly", "jam", "preserves"])) {
                return None;
            }
            if ctx.any_matches(&BREAD_RE) {
                Some("PB&J Sandwich".to_string())
            } else {
                Some("PB&J".to_string())
            }
        },
    },
    TitleRule {
        name: "grilled_cheese",
        apply: |ctx| {
            if ctx.has("cheese")
                && ctx.any_matches(&BREAD_RE)
                && (ctx.has("butter") || ctx.has("olive oil"))
            {
                Some("Grilled Cheese".to_string())
            } else {
                None
            }
        },
    },
    TitleRule {
        name: "egg_dish",
        apply: |ctx| {
            if !ctx.has_any(&["egg", "eggs"]) {
                return None;
            }
            let has_veg = ctx.any_matches(&VEG_RE);
            let has_cheese = ctx.has("cheese");
            Some(match (has_veg, has_cheese) {
                (true, true) => "Veggie Cheese Omelet".to_string(),
                (true, false) => "Veggie Omelet".to_string(),
                (false, true) => "Cheese Omelet".to_string(),
                (false, false) => "Scrambled Eggs".to_string(),
            })
        },
    },
    TitleRule {
        name: "pasta",
        apply: |ctx| {
            if !ctx.any_matches(&PASTA_RE) {
                return None;
            }
            let protein = ctx.pick(&PASTA_PROTEIN_RE);
            let veg = ctx.pick(&PASTA_VEG_RE);
            Some(match (protein, veg) {
                (Some(p), Some(v)) => format!("{} {} Pasta", p, v),
                (Some(p), None) => format!("{} Pasta", p),
                (None, Some(v)) => format!("{} Pasta", v),
                (None, None) => "Simple Pasta".to_string(),
            })
        },
    },
    TitleRule {
        name: "rice_bowl",
        apply: |ctx| {
            if !ctx.any_matches(&RICE_RE) {
                return None;
            }
            let protein = ctx.pick(&RICE_PROTEIN_RE);
            let veg = ctx.pick(&RICE_VEG_RE);
            Some(match (protein, veg) {
                (Some(p), Some(v)) => format!("{} {} Rice Bowl", p, v),
                (Some(p), None) => format!("{} Rice Bowl", p),
                (None, Some(v)) => format!("{} Rice Bowl", v),
                (None, None) => "Rice Bowl".to_string(),
            })
        },
    },
    TitleRule {
        name: "sandwich",
        apply: |ctx| {
            if !ctx.any_matches(&BREAD_RE) {
                return None;
            }
            let protein = ctx.pick(&SANDWICH_PROTEIN_RE);
            let veg = ctx.pick(&SANDWICH_VEG_RE);
            let cheese = ctx.has("cheese");
            match protein {
                Some(p) if veg.is_some() || cheese => {
                    let mut parts = vec![p];
                    if cheese {
                        parts.push("Cheese".to_string());
                    }
                    if let Some(v) = veg {
                        parts.push(v);
                    }
                    Some(format!("{} Sandwich", parts.join(" ")))
                }
                Some(p) => Some(format!("{} Sandwich", p)),
                None => Some("Simple Sandwich".to_string()),
            }
        },
    },
    TitleRule {
        name: "general_bowl",
        apply: |ctx| {
            let parts: Vec<String> = [
                ctx.pick(&PROTEIN_RE),
                ctx.pick(&VEG_RE),
                ctx.pick(&CARB_RE),
            ]
            .into_iter()
            .flatten()
            .collect();
            if parts.is_empty() {
                None
            } else {
                Some(format!("{} Bowl", parts.join(" ")))
            }
        },
    },
];

/// Infer a display title for an ingredient set.
///
/// Total and deterministic: always returns a non-empty title. When no rule
/// matches, the first three cleaned ingredient entries are title-cased and
/// joined; an empty ingredient list yields `"Quick Recipe"`.
pub fn infer_title(ingredients: &[String]) -> String {
    let ctx = TitleContext::new(ingredients);

    for rule in RULES {
        if let Some(title) = (rule.apply)(&ctx) {
            tracing::debug!(rule = rule.name, title = %title, "title rule matched");
            return title;
        }
    }

    let fallback: Vec<String> = ctx.raw.iter().take(3).map(|x| title_case(x)).collect();
    if fallback.is_empty() {
        "Quick Recipe".to_string()
    } else {
        fallback.join(" ")
    }
}
