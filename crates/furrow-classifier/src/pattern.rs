// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Token-sequence pattern scorer.
//!
//! Every distinct pattern of a category that matches contiguously adds a
//! fixed weight. With document vectors available, a close match to one of the
//! category's canonical examples adds a similarity-proportional bonus.

use furrow_config::model::ScorerKind;
use furrow_core::FurrowError;
use furrow_nlp::{Analysis, SparseVector, cosine_similarity, document_vector, tokenize};

use crate::corpus::PROFILES;
use crate::scorer::{CategoryScores, Scorer, missing_capability, record};

const PATTERN_WEIGHT: f64 = 0.8;

/// Canonical-example similarity must exceed this to count.
const EXAMPLE_SIMILARITY_THRESHOLD: f64 = 0.5;

const EXAMPLE_SIMILARITY_WEIGHT: f64 = 0.6;

pub struct PatternScorer {
    /// Canonical example vectors per profile, when vectors are enabled.
    canonical: Option<Vec<Vec<SparseVector>>>,
}

impl PatternScorer {
    pub fn new(use_vectors: bool) -> Self {
        let canonical = use_vectors.then(|| {
            PROFILES
                .iter()
                .map(|profile| {
                    profile
                        .canonical_examples()
                        .iter()
                        .map(|example| document_vector(&tokenize(example)))
                        .collect()
                })
                .collect()
        });
        Self { canonical }
    }

    fn example_bonus(&self, index: usize, analysis: &Analysis) -> f64 {
        let (Some(canonical), Some(vector)) = (&self.canonical, analysis.vector()) else {
            return 0.0;
        };
        let best = canonical[index]
            .iter()
            .map(|example| cosine_similarity(vector, example))
            .fold(0.0, f64::max);
        if best > EXAMPLE_SIMILARITY_THRESHOLD {
            best * EXAMPLE_SIMILARITY_WEIGHT
        } else {
            0.0
        }
    }
}

/// Whether every slot of `pattern` accepts the token at the same offset of
/// some contiguous window of `tokens`.
pub fn matches_pattern(tokens: &[String], pattern: &[&[&str]]) -> bool {
    if pattern.is_empty() || pattern.len() > tokens.len() {
        return false;
    }
    tokens.windows(pattern.len()).any(|window| {
        window
            .iter()
            .zip(pattern.iter())
            .all(|(token, slot)| slot.contains(&token.as_str()))
    })
}

impl Scorer for PatternScorer {
    fn kind(&self) -> ScorerKind {
        ScorerKind::Pattern
    }

    fn score(&self, analysis: &Analysis) -> Result<CategoryScores, FurrowError> {
        if analysis.tagged().is_none() {
            return Err(missing_capability(self.kind(), "linguistic"));
        }
        let tokens = analysis.tokens();
        let mut scores = CategoryScores::new();
        for (index, profile) in PROFILES.iter().enumerate() {
            let matched = profile
                .patterns
                .iter()
                .filter(|&&pattern| matches_pattern(tokens, pattern))
                .count();
            let score = matched as f64 * PATTERN_WEIGHT + self.example_bonus(index, analysis);
            record(&mut scores, profile.question_type, score);
        }
        Ok(scores)
    }
}
