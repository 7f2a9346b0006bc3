// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dictionary-plus-suffix lemmatizer.
//!
//! Irregular and inflected verb forms come from an exception table; plural
//! nouns are reduced by suffix rules. Tokens of three characters or fewer are
//! returned unchanged.

/// Inflected forms whose lemma a suffix rule would get wrong.
const EXCEPTIONS: &[(&str, &str)] = &[
    ("applied", "apply"),
    ("applying", "apply"),
    ("children", "child"),
    ("cropping", "crop"),
    ("disking", "disk"),
    ("feet", "foot"),
    ("fertilizing", "fertilize"),
    ("grew", "grow"),
    ("growing", "grow"),
    ("grown", "grow"),
    ("improving", "improve"),
    ("increasing", "increase"),
    ("irrigating", "irrigate"),
    ("leaves", "leaf"),
    ("liming", "lime"),
    ("losing", "lose"),
    ("mapping", "map"),
    ("mice", "mouse"),
    ("paying", "pay"),
    ("planted", "plant"),
    ("planting", "plant"),
    ("plowing", "plow"),
    ("reducing", "reduce"),
    ("rotating", "rotate"),
    ("sampling", "sample"),
    ("saving", "save"),
    ("spreading", "spread"),
    ("tested", "test"),
    ("testing", "test"),
    ("tilling", "till"),
    ("turning", "turn"),
    ("used", "use"),
    ("using", "use"),
    ("yellowing", "yellow"),
];

/// Words ending in `s` that are not plurals.
const INVARIANT: &[&str] = &[
    "across", "always", "does", "eqip", "fsa", "gas", "gps", "grass", "has", "is", "less",
    "nrcs", "ph", "series", "species", "this", "us", "usda", "was", "yes",
];

/// Reduce a lowercase token to its dictionary form.
pub fn lemmatize(token: &str) -> String {
    if let Ok(idx) = EXCEPTIONS.binary_search_by(|(form, _)| form.cmp(&token)) {
        return EXCEPTIONS[idx].1.to_string();
    }
    if token.len() <= 3 || INVARIANT.binary_search(&token).is_ok() {
        return token.to_string();
    }
    if let Some(stem) = token.strip_suffix("ies")
        && token.len() > 4
    {
        return format!("{stem}y");
    }
    if token.ends_with("sses") {
        return token[..token.len() - 2].to_string();
    }
    if let Some(stem) = token.strip_suffix('s')
        && !(token.ends_with("ss") || token.ends_with("us") || token.ends_with("is"))
    {
        return stem.to_string();
    }
    token.to_string()
}

/// Lemmatize every token of a sequence.
pub fn lemmatize_all<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens.iter().map(|t| lemmatize(t.as_ref())).collect()
}
