// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lowercasing word tokenizer.

use std::sync::LazyLock;

use regex::Regex;

/// Alphanumeric runs, optionally followed by a single apostrophe suffix (`what's`).
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z0-9]+(?:'[a-z]+)?").expect("token pattern is valid"));

/// Split text into lowercase word tokens, dropping punctuation.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Whether `needle` occurs as a contiguous run inside `haystack`.
pub fn contains_sequence<S: AsRef<str>, T: AsRef<str>>(haystack: &[S], needle: &[T]) -> bool {
    if needle.is_empty() || needle.len() > haystack.len() {
        return false;
    }
    haystack.windows(needle.len()).any(|window| {
        window
            .iter()
            .zip(needle)
            .all(|(h, n)| h.as_ref() == n.as_ref())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(
            tokenize("What cover crops work best, in my SANDY soil?"),
            vec!["what", "cover", "crops", "work", "best", "in", "my", "sandy", "soil"]
        );
    }

    #[test]
    fn keeps_apostrophe_suffix_and_splits_hyphens() {
        assert_eq!(tokenize("What's no-till?"), vec!["what's", "no", "till"]);
    }

    #[test]
    fn keeps_numbers() {
        assert_eq!(tokenize("40 lbs of N per acre"), vec!["40", "lbs", "of", "n", "per", "acre"]);
    }

    #[test]
    fn empty_and_symbol_only_text_yield_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("?!... --").is_empty());
    }

    #[test]
    fn sequence_must_be_contiguous() {
        let tokens = tokenize("apply nitrogen fertilizer");
        assert!(contains_sequence(&tokens, &["nitrogen", "fertilizer"]));
        assert!(!contains_sequence(&tokens, &["apply", "fertilizer"]));
        assert!(!contains_sequence(&tokens, &[] as &[&str]));
    }
}
