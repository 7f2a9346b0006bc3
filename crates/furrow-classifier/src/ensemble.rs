// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ensemble classifier combining the enabled scorers.
//!
//! Scores from every scorer are summed per category. The highest total wins
//! (ties go to the category declared first); confidence is the total capped
//! at 1.0. When nothing scores, the classifier answers with the fallback
//! category at a fixed low confidence.

use std::time::Instant;

use furrow_config::model::{ClassifierConfig, NlpConfig, ScorerKind};
use furrow_core::{ClassificationResult, QuestionType};
use furrow_nlp::{Analysis, Capabilities};
use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

use crate::keyword::KeywordScorer;
use crate::linguistic::LinguisticScorer;
use crate::pattern::PatternScorer;
use crate::scorer::{CategoryScores, Scorer};
use crate::semantic::SemanticScorer;

/// Output of one scorer for one question.
#[derive(Debug, Clone)]
pub struct ScorerOutcome {
    pub kind: ScorerKind,
    /// `None` when the scorer failed.
    pub scores: Option<CategoryScores>,
}

/// A classification with the evidence behind it.
#[derive(Debug, Clone)]
pub struct DetailedClassification {
    pub result: ClassificationResult,
    /// Per-scorer outputs, in ensemble order.
    pub breakdown: Vec<ScorerOutcome>,
    /// Summed score per category.
    pub totals: CategoryScores,
    /// Whether the no-signal fallback answered.
    pub fallback: bool,
}

/// Ensemble question classifier.
///
/// Built once at startup and shared across requests.
pub struct QuestionClassifier {
    scorers: Vec<Box<dyn Scorer>>,
    capabilities: Capabilities,
    fallback_confidence: f64,
    alternative_min_score: f64,
    alternative_relative_floor: f64,
    max_alternatives: usize,
}

impl QuestionClassifier {
    /// Build the ensemble from configuration.
    ///
    /// Scorers whose required capability is disabled are left out.
    pub fn new(config: &ClassifierConfig, nlp: &NlpConfig) -> Self {
        let capabilities = Capabilities {
            linguistic: nlp.linguistic,
            vectors: nlp.vectors,
            tfidf: nlp.tfidf,
        };

        let mut scorers: Vec<Box<dyn Scorer>> = Vec::with_capacity(config.scorers.len());
        for kind in &config.scorers {
            let scorer: Option<Box<dyn Scorer>> = match kind {
                ScorerKind::Pattern if capabilities.linguistic => {
                    Some(Box::new(PatternScorer::new(capabilities.vectors)))
                }
                ScorerKind::Semantic if capabilities.tfidf => Some(Box::new(SemanticScorer::new())),
                ScorerKind::Keyword => Some(Box::new(KeywordScorer::new(capabilities.linguistic))),
                ScorerKind::Linguistic if capabilities.linguistic => {
                    Some(Box::new(LinguisticScorer::new()))
                }
                _ => None,
            };
            match scorer {
                Some(scorer) => scorers.push(scorer),
                None => info!(
                    scorer = kind.as_str(),
                    "scorer disabled, required capability unavailable"
                ),
            }
        }

        debug!(
            scorers = ?scorers.iter().map(|s| s.kind().as_str()).collect::<Vec<_>>(),
            "classifier ensemble built"
        );

        Self {
            scorers,
            capabilities,
            fallback_confidence: config.fallback_confidence,
            alternative_min_score: config.alternative_min_score,
            alternative_relative_floor: config.alternative_relative_floor,
            max_alternatives: config.max_alternatives,
        }
    }

    /// Scorers in the ensemble, in evaluation order.
    pub fn scorer_kinds(&self) -> Vec<ScorerKind> {
        self.scorers.iter().map(|s| s.kind()).collect()
    }

    /// Classify a question. Always produces a result.
    pub fn classify(&self, question_text: &str) -> ClassificationResult {
        self.classify_detailed(question_text).result
    }

    /// Classify a question and keep the per-scorer breakdown.
    pub fn classify_detailed(&self, question_text: &str) -> DetailedClassification {
        let started = Instant::now();
        let analysis = Analysis::new(question_text, self.capabilities);

        let mut breakdown = Vec::with_capacity(self.scorers.len());
        let mut totals = CategoryScores::new();
        for scorer in &self.scorers {
            let scores = match scorer.score(&analysis) {
                Ok(scores) => {
                    for (question_type, score) in &scores {
                        *totals.entry(*question_type).or_insert(0.0) += score;
                    }
                    Some(scores)
                }
                Err(e) => {
                    warn!(scorer = scorer.kind().as_str(), error = %e, "scorer failed, skipping");
                    None
                }
            };
            breakdown.push(ScorerOutcome {
                kind: scorer.kind(),
                scores,
            });
        }

        let (result, fallback) = match self.rank(&totals) {
            Some(ranked) => (self.decide(&ranked, &breakdown), false),
            None => (self.fallback_result(), true),
        };

        debug!(
            question_type = %result.question_type,
            confidence = result.confidence_score,
            alternatives = result.alternative_types.len(),
            fallback,
            elapsed_us = started.elapsed().as_micros() as u64,
            "question classified"
        );

        DetailedClassification {
            result,
            breakdown,
            totals,
            fallback,
        }
    }

    /// Positive totals ordered by score descending, ties in declaration order.
    fn rank(&self, totals: &CategoryScores) -> Option<Vec<(QuestionType, f64)>> {
        let mut ranked: Vec<(QuestionType, f64)> = QuestionType::iter()
            .filter_map(|t| totals.get(&t).map(|score| (t, *score)))
            .filter(|(_, score)| *score > 0.0)
            .collect();
        if ranked.is_empty() {
            return None;
        }
        // stable sort keeps declaration order among equal scores
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        Some(ranked)
    }

    fn decide(
        &self,
        ranked: &[(QuestionType, f64)],
        breakdown: &[ScorerOutcome],
    ) -> ClassificationResult {
        let (primary, top) = ranked[0];
        let alternative_types = ranked[1..]
            .iter()
            .filter(|(_, score)| {
                *score > self.alternative_min_score
                    && *score > self.alternative_relative_floor * top
            })
            .take(self.max_alternatives)
            .map(|(question_type, _)| *question_type)
            .collect();

        let contributors: Vec<&str> = breakdown
            .iter()
            .filter(|outcome| {
                outcome
                    .scores
                    .as_ref()
                    .and_then(|scores| scores.get(&primary))
                    .is_some_and(|score| *score > 0.0)
            })
            .map(|outcome| outcome.kind.as_str())
            .collect();

        ClassificationResult {
            question_type: primary,
            confidence_score: top.min(1.0),
            alternative_types,
            reasoning: format!(
                "Classified as {primary} (score {top:.2}) from {} signals",
                contributors.join(", ")
            ),
        }
    }

    fn fallback_result(&self) -> ClassificationResult {
        ClassificationResult {
            question_type: QuestionType::FALLBACK,
            confidence_score: self.fallback_confidence,
            alternative_types: Vec::new(),
            reasoning: format!(
                "No category matched the question; defaulting to {}",
                QuestionType::FALLBACK
            ),
        }
    }
}
