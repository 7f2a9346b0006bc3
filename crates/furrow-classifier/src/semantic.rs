// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! TF-IDF similarity scorer over the labeled example corpus.

use furrow_config::model::ScorerKind;
use furrow_core::{FurrowError, QuestionType};
use furrow_nlp::{Analysis, TfidfVectorizer};

use crate::corpus::PROFILES;
use crate::scorer::{CategoryScores, Scorer, record};

/// Example similarities at or below this are ignored.
const SIMILARITY_FLOOR: f64 = 0.1;

const SEMANTIC_WEIGHT: f64 = 0.7;

pub struct SemanticScorer {
    model: TfidfVectorizer,
    /// Category of each fitted document, in corpus order.
    labels: Vec<QuestionType>,
}

impl SemanticScorer {
    /// Fit the TF-IDF space over every example of every category.
    pub fn new() -> Self {
        let (labels, examples): (Vec<QuestionType>, Vec<&str>) = PROFILES
            .iter()
            .flat_map(|profile| {
                profile
                    .examples
                    .iter()
                    .map(move |example| (profile.question_type, *example))
            })
            .unzip();
        Self {
            model: TfidfVectorizer::fit(&examples),
            labels,
        }
    }
}

impl Default for SemanticScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for SemanticScorer {
    fn kind(&self) -> ScorerKind {
        ScorerKind::Semantic
    }

    fn score(&self, analysis: &Analysis) -> Result<CategoryScores, FurrowError> {
        let query = self.model.transform(analysis.text());
        let mut scores = CategoryScores::new();
        if query.is_empty() {
            return Ok(scores);
        }

        let mut sums = CategoryScores::new();
        for (document, label) in self.model.documents().iter().zip(&self.labels) {
            let similarity = TfidfVectorizer::similarity(&query, document);
            if similarity > SIMILARITY_FLOOR {
                *sums.entry(*label).or_insert(0.0) += similarity;
            }
        }

        for (question_type, sum) in sums {
            let examples = PROFILES[question_type as usize].examples.len() as f64;
            record(&mut scores, question_type, SEMANTIC_WEIGHT * sum / examples);
        }
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use furrow_nlp::Capabilities;

    fn score(text: &str) -> CategoryScores {
        SemanticScorer::new()
            .score(&Analysis::new(text, Capabilities::NONE))
            .unwrap()
    }

    #[test]
    fn fits_every_example() {
        let scorer = SemanticScorer::new();
        let total: usize = PROFILES.iter().map(|p| p.examples.len()).sum();
        assert_eq!(scorer.labels.len(), total);
        assert_eq!(scorer.model.documents().len(), total);
    }

    #[test]
    fn unknown_vocabulary_scores_nothing() {
        assert!(score("zxqv plorth wibbly grznak ftang").is_empty());
    }

    #[test]
    fn verbatim_example_scores_its_category() {
        let example = PROFILES[QuestionType::WeatherImpact as usize].examples[0];
        let scores = score(example);
        // similarity 1.0 with itself, averaged over the category's examples
        let examples = PROFILES[QuestionType::WeatherImpact as usize].examples.len();
        let floor = SEMANTIC_WEIGHT / examples as f64;
        assert!(scores[&QuestionType::WeatherImpact] >= floor - 1e-9);
    }

    #[test]
    fn scores_stay_below_weight() {
        for (_, value) in score("How should I apply nitrogen fertilizer to my corn?") {
            assert!(value > 0.0 && value <= SEMANTIC_WEIGHT + 1e-9);
        }
    }
}
