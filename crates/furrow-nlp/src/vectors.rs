// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sparse document vectors built from lemma and character-trigram features.

use std::collections::BTreeMap;

use crate::lemma::lemmatize;
use crate::stopwords::is_stop_word;

/// Weight of a whole-lemma feature.
const WORD_WEIGHT: f64 = 1.0;

/// Weight of each character trigram of a padded lemma.
const TRIGRAM_WEIGHT: f64 = 0.25;

/// A sparse feature vector keyed by feature name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    features: BTreeMap<String, f64>,
}

impl SparseVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `weight` to a feature, creating it if absent.
    pub fn add(&mut self, feature: impl Into<String>, weight: f64) {
        *self.features.entry(feature.into()).or_insert(0.0) += weight;
    }

    pub fn get(&self, feature: &str) -> f64 {
        self.features.get(feature).copied().unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.features.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        self.features.values().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Inner product over the shared features.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().map(|(k, v)| v * large.get(k)).sum()
    }

    /// Scale to unit length. A zero vector becomes empty.
    pub fn normalized(self) -> SparseVector {
        let norm = self.norm();
        if norm == 0.0 {
            return SparseVector::new();
        }
        SparseVector {
            features: self
                .features
                .into_iter()
                .map(|(k, v)| (k, v / norm))
                .collect(),
        }
    }
}

/// Cosine similarity between two sparse vectors.
///
/// Returns 0.0 when either vector is empty or has zero norm.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let denom = a.norm() * b.norm();
    if denom == 0.0 {
        return 0.0;
    }
    a.dot(b) / denom
}

/// Embed a token sequence as lemma and character-trigram features.
///
/// Stop words are skipped. Each remaining lemma contributes a `w:` feature
/// and one `c:` feature per trigram of the lemma padded with `#`.
pub fn document_vector<S: AsRef<str>>(tokens: &[S]) -> SparseVector {
    let mut vector = SparseVector::new();
    for token in tokens.iter().map(AsRef::as_ref) {
        if is_stop_word(token) {
            continue;
        }
        let lemma = lemmatize(token);
        vector.add(format!("w:{lemma}"), WORD_WEIGHT);

        let padded: Vec<char> = format!("#{lemma}#").chars().collect();
        for trigram in padded.windows(3) {
            let gram: String = trigram.iter().collect();
            vector.add(format!("c:{gram}"), TRIGRAM_WEIGHT);
        }
    }
    vector
}
