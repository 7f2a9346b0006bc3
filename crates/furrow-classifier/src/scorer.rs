// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The scorer seam of the ensemble.

use std::collections::BTreeMap;

use furrow_config::model::ScorerKind;
use furrow_core::{FurrowError, QuestionType};
use furrow_nlp::Analysis;

/// Positive scores per category. Categories without signal are absent.
pub type CategoryScores = BTreeMap<QuestionType, f64>;

/// One scoring strategy of the ensemble.
pub trait Scorer: Send + Sync {
    /// Which strategy this is.
    fn kind(&self) -> ScorerKind;

    /// Score an analyzed question against every category.
    fn score(&self, analysis: &Analysis) -> Result<CategoryScores, FurrowError>;
}

/// Insert `score` for `question_type` when it is positive.
pub(crate) fn record(scores: &mut CategoryScores, question_type: QuestionType, score: f64) {
    if score > 0.0 {
        scores.insert(question_type, score);
    }
}

/// Error for a scorer invoked on an analysis missing a capability it needs.
pub(crate) fn missing_capability(scorer: ScorerKind, capability: &str) -> FurrowError {
    FurrowError::Scorer {
        scorer: scorer.as_str(),
        message: format!("{capability} analysis unavailable"),
    }
}
