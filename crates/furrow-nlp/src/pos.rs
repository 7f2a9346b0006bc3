// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lexicon-driven part-of-speech tagger.
//!
//! Closed word classes are looked up directly; open classes fall back to an
//! agricultural verb/adjective lexicon and suffix heuristics. Anything left
//! over is a noun.

use crate::lemma::lemmatize;

/// Coarse part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    /// Interrogative word (what, when, how, ...).
    Wh,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    /// Auxiliary or modal verb.
    Auxiliary,
    Number,
    Adjective,
    Adverb,
    Verb,
    Noun,
}

const WH_WORDS: &[&str] = &["how", "what", "when", "where", "which", "who", "whom", "whose", "why"];

const PRONOUNS: &[&str] = &[
    "he", "her", "hers", "him", "his", "i", "it", "its", "me", "mine", "my", "myself", "our",
    "ours", "ourselves", "she", "their", "theirs", "them", "they", "us", "we", "you", "your",
    "yours",
];

const DETERMINERS: &[&str] = &[
    "a", "all", "an", "another", "any", "each", "every", "no", "some", "that", "the", "these",
    "this", "those",
];

const PREPOSITIONS: &[&str] = &[
    "about", "across", "after", "against", "at", "before", "between", "by", "during", "for",
    "from", "in", "into", "of", "on", "over", "per", "than", "through", "to", "under", "with",
    "without",
];

const CONJUNCTIONS: &[&str] = &["and", "because", "but", "if", "nor", "or", "so", "while"];

const AUXILIARIES: &[&str] = &[
    "am", "are", "be", "been", "being", "can", "could", "did", "do", "does", "had", "has",
    "have", "is", "may", "might", "must", "shall", "should", "was", "were", "will", "would",
];

/// Verb lemmas common in farmer questions.
const VERBS: &[&str] = &[
    "adopt", "affect", "afford", "apply", "balance", "band", "broadcast", "build", "buy",
    "calibrate", "cause", "choose", "compare", "conserve", "control", "correct", "cut", "delay",
    "detect", "diagnose", "fertilize", "fix", "get", "grow", "help", "identify", "improve",
    "increase", "inject", "interpret", "invest", "irrigate", "know", "lose", "lower", "maintain",
    "make", "manage", "maximize", "mean", "measure", "monitor", "need", "offer", "pay", "plan",
    "plant", "prevent", "protect", "qualify", "raise", "read", "reduce", "rotate", "save",
    "select", "send", "show", "spread", "sustain", "switch", "tell", "terminate", "test", "till",
    "treat", "turn", "upload", "use", "wash", "work",
];

const ADJECTIVES: &[&str] = &[
    "acidic", "alkaline", "available", "best", "better", "brown", "cheap", "clay", "cold",
    "commercial", "conventional", "deficient", "dry", "effective", "efficient", "eligible",
    "fall", "federal", "good", "green", "heavy", "high", "hot", "ideal", "important", "light",
    "loamy", "local", "low", "organic", "poor", "profitable", "purple", "regenerative",
    "resistant", "right", "sandy", "slow", "spring", "stunted", "sustainable", "synthetic",
    "tolerant", "variable", "wet", "winter", "worth", "yellow",
];

const ADVERBS: &[&str] = &[
    "early", "late", "more", "most", "much", "naturally", "not", "now", "often", "sustainably",
    "too", "very", "visually", "well",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "able", "ible", "ive"];

fn listed(list: &[&str], token: &str) -> bool {
    list.binary_search(&token).is_ok()
}

/// Tag a single lowercase token.
pub fn tag(token: &str) -> PosTag {
    if listed(WH_WORDS, token) {
        return PosTag::Wh;
    }
    if listed(PRONOUNS, token) {
        return PosTag::Pronoun;
    }
    if listed(DETERMINERS, token) {
        return PosTag::Determiner;
    }
    if listed(PREPOSITIONS, token) {
        return PosTag::Preposition;
    }
    if listed(CONJUNCTIONS, token) {
        return PosTag::Conjunction;
    }
    if listed(AUXILIARIES, token) {
        return PosTag::Auxiliary;
    }
    if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
        return PosTag::Number;
    }
    if listed(ADJECTIVES, token) {
        return PosTag::Adjective;
    }
    if listed(ADVERBS, token) {
        return PosTag::Adverb;
    }
    if listed(VERBS, token) || listed(VERBS, &lemmatize(token)) {
        return PosTag::Verb;
    }
    if token.ends_with("ly") && token.len() > 4 {
        return PosTag::Adverb;
    }
    if token.len() > 5 && ADJECTIVE_SUFFIXES.iter().any(|s| token.ends_with(s)) {
        return PosTag::Adjective;
    }
    PosTag::Noun
}

/// Tag every token of a sequence.
pub fn tag_all<S: AsRef<str>>(tokens: &[S]) -> Vec<PosTag> {
    tokens.iter().map(|t| tag(t.as_ref())).collect()
}
