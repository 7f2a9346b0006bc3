// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword phrase scorer.
//!
//! An exact contiguous phrase match scores 1.0; otherwise a phrase earns the
//! fraction of its words present in the question, provided at least one of
//! the shared words is not a stop word. With lemmas available, a phrase whose
//! lemmatized form appears in the lemmatized question earns a bonus on top.

use std::collections::HashSet;

use furrow_config::model::ScorerKind;
use furrow_core::{FurrowError, QuestionType};
use furrow_nlp::{Analysis, contains_sequence, is_stop_word, lemmatize, tokenize};

use crate::corpus::PROFILES;
use crate::scorer::{CategoryScores, Scorer, record};

const EXACT_MATCH: f64 = 1.0;
const LEMMA_BONUS: f64 = 0.5;
const KEYWORD_WEIGHT: f64 = 0.5;

struct Phrase {
    tokens: Vec<String>,
    lemmas: Vec<String>,
}

pub struct KeywordScorer {
    phrases: Vec<(QuestionType, Vec<Phrase>)>,
    lemma_bonus: bool,
}

impl KeywordScorer {
    /// `lemma_bonus` enables the lemmatized-phrase bonus.
    pub fn new(lemma_bonus: bool) -> Self {
        let phrases = PROFILES
            .iter()
            .map(|profile| {
                let phrases = profile
                    .phrases
                    .iter()
                    .map(|phrase| {
                        let tokens = tokenize(phrase);
                        let lemmas = tokens.iter().map(|t| lemmatize(t)).collect();
                        Phrase { tokens, lemmas }
                    })
                    .filter(|phrase| !phrase.tokens.is_empty())
                    .collect();
                (profile.question_type, phrases)
            })
            .collect();
        Self {
            phrases,
            lemma_bonus,
        }
    }
}

impl Scorer for KeywordScorer {
    fn kind(&self) -> ScorerKind {
        ScorerKind::Keyword
    }

    fn score(&self, analysis: &Analysis) -> Result<CategoryScores, FurrowError> {
        let tokens = analysis.tokens();
        let present: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        let lemmas = if self.lemma_bonus { analysis.lemmas() } else { None };

        let mut scores = CategoryScores::new();
        for (question_type, phrases) in &self.phrases {
            let mut sum = 0.0;
            for phrase in phrases {
                if contains_sequence(tokens, &phrase.tokens) {
                    sum += EXACT_MATCH;
                } else if phrase
                    .tokens
                    .iter()
                    .any(|t| !is_stop_word(t) && present.contains(t.as_str()))
                {
                    let matched = phrase
                        .tokens
                        .iter()
                        .filter(|t| present.contains(t.as_str()))
                        .count();
                    sum += matched as f64 / phrase.tokens.len() as f64;
                }
                if let Some(lemmas) = &lemmas
                    && contains_sequence(lemmas, &phrase.lemmas)
                {
                    sum += LEMMA_BONUS;
                }
            }
            record(&mut scores, *question_type, KEYWORD_WEIGHT * sum);
        }
        Ok(scores)
    }
}
