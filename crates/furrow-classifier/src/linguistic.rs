// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Part-of-speech feature scorer.
//!
//! Noun and verb lemmas are matched against each category's semantic
//! keywords, and the question's interrogatives against the ones the category
//! expects. A question with no content noun or verb from any category's
//! keywords scores nothing, so an interrogative alone never carries a
//! classification.

use std::collections::BTreeSet;

use furrow_config::model::ScorerKind;
use furrow_core::FurrowError;
use furrow_nlp::{Analysis, PosTag, Token, is_stop_word};

use crate::corpus::PROFILES;
use crate::scorer::{CategoryScores, Scorer, missing_capability, record};

const NOUN_WEIGHT: f64 = 0.3;
const VERB_WEIGHT: f64 = 0.2;
const WH_WEIGHT: f64 = 0.5;
const LINGUISTIC_WEIGHT: f64 = 0.4;

#[derive(Default)]
pub struct LinguisticScorer;

impl LinguisticScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Scorer for LinguisticScorer {
    fn kind(&self) -> ScorerKind {
        ScorerKind::Linguistic
    }

    fn score(&self, analysis: &Analysis) -> Result<CategoryScores, FurrowError> {
        let tagged = analysis
            .tagged()
            .ok_or_else(|| missing_capability(self.kind(), "linguistic"))?;

        if !tagged.iter().any(is_domain_content) {
            return Ok(CategoryScores::new());
        }

        let mut nouns = BTreeSet::new();
        let mut verbs = BTreeSet::new();
        let mut interrogatives = BTreeSet::new();
        for token in tagged {
            match token.tag {
                PosTag::Noun => {
                    nouns.insert(token.lemma.as_str());
                }
                PosTag::Verb => {
                    verbs.insert(token.lemma.as_str());
                }
                PosTag::Wh => {
                    interrogatives.insert(token.text.as_str());
                }
                _ => {}
            }
        }

        let mut scores = CategoryScores::new();
        for profile in &PROFILES {
            let keyword_hits = |lemmas: &BTreeSet<&str>| {
                lemmas
                    .iter()
                    .filter(|lemma| profile.semantic_keywords.contains(*lemma))
                    .count() as f64
            };
            let wh_hits = interrogatives
                .iter()
                .filter(|wh| profile.expected_wh.contains(*wh))
                .count() as f64;
            let sum = NOUN_WEIGHT * keyword_hits(&nouns)
                + VERB_WEIGHT * keyword_hits(&verbs)
                + WH_WEIGHT * wh_hits;
            record(&mut scores, profile.question_type, LINGUISTIC_WEIGHT * sum);
        }
        Ok(scores)
    }
}

fn is_domain_content(token: &Token) -> bool {
    matches!(token.tag, PosTag::Noun | PosTag::Verb)
        && !is_stop_word(&token.text)
        && PROFILES
            .iter()
            .any(|profile| profile.semantic_keywords.contains(&token.lemma.as_str()))
}
