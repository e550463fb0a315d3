//! Ingredient text normalization.
//!
//! Turns free-form ingredient text into canonical lowercase "core names" used
//! as matching keys by the title engine and the reconciler.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static EDGE_PUNCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[,.\-]+|[,.\-]+$").unwrap());

static PAREN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\([^)]*\)").unwrap());

static FILLER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(optional|to taste|as needed)\b").unwrap());

static NON_CORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").unwrap());

/// Trim a token, collapse internal whitespace, and strip leading/trailing
/// punctuation (`,`, `.`, `-`). Case is preserved.
pub fn clean_token(raw: &str) -> String {
    let collapsed = WHITESPACE_RE.replace_all(raw.trim(), " ");
    EDGE_PUNCT_RE.replace_all(&collapsed, "").trim().to_string()
}

/// Normalize raw ingredient text into a core name.
///
/// Lowercases, removes parenthetical spans and the filler words `optional`,
/// `to taste`, `as needed`, strips everything outside `[a-z0-9 -]`, and
/// collapses whitespace. Empty input yields an empty string; callers treat an
/// empty core name as "drop this entry", never as a wildcard.
pub fn normalize(raw: &str) -> String {
    let cleaned = clean_token(raw).to_lowercase();
    let no_parens = PAREN_RE.replace_all(&cleaned, " ");
    let no_fillers = FILLER_RE.replace_all(&no_parens, " ");
    let core_chars = NON_CORE_RE.replace_all(&no_fillers, " ");
    WHITESPACE_RE
        .replace_all(&core_chars, " ")
        .trim()
        .to_string()
}

/// Title-case each whitespace-separated word of a string.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split free-form ingredient input into cleaned entries.
///
/// Each entry is cleaned with [`clean_token`], parenthetical spans are
/// removed, blanks are dropped, and duplicates are removed preserving first
/// occurrence.
pub fn clean_list<I, S>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for entry in entries {
        let cleaned = clean_token(entry.as_ref());
        let without_parens = PAREN_RE.replace_all(&cleaned, " ");
        let item = WHITESPACE_RE
            .replace_all(without_parens.trim(), " ")
            .to_string();
        if item.is_empty() {
            continue;
        }
        if seen.insert(item.clone()) {
            out.push(item);
        }
    }
    out
}

/// Split a comma-separated ingredient string into cleaned entries.
pub fn split_free_form(text: &str) -> Vec<String> {
    clean_list(text.split(','))
}
