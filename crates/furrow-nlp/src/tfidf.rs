// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! TF-IDF vector space over a fixed document collection.
//!
//! Terms are raw lowercase tokens with stop words removed. IDF is smoothed
//! (`ln((1 + n) / (1 + df)) + 1`) and every vector is L2-normalized, so the
//! dot product of two vectors is their cosine similarity.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::stopwords::is_stop_word;
use crate::tokenize::tokenize;
use crate::vectors::SparseVector;

/// A TF-IDF model fitted on a document collection.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    idf: BTreeMap<String, f64>,
    documents: Vec<SparseVector>,
}

impl TfidfVectorizer {
    /// Fit the vocabulary and IDF weights, and vectorize every document.
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let terms: Vec<Vec<String>> = documents.iter().map(|d| terms(d.as_ref())).collect();

        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        for doc in &terms {
            let unique: BTreeSet<&str> = doc.iter().map(String::as_str).collect();
            for term in unique {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let n = documents.len() as f64;
        let idf = document_frequency
            .into_iter()
            .map(|(term, df)| {
                let weight = ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0;
                (term.to_string(), weight)
            })
            .collect();

        let mut model = Self {
            idf,
            documents: Vec::new(),
        };
        let documents = terms.iter().map(|doc| model.weigh(doc)).collect();
        model.documents = documents;

        debug!(
            documents = model.documents.len(),
            vocabulary = model.idf.len(),
            "tf-idf model fitted"
        );
        model
    }

    /// Vectorize text against the fitted vocabulary. Unknown terms are ignored.
    pub fn transform(&self, text: &str) -> SparseVector {
        self.weigh(&terms(text))
    }

    /// Vectors of the fitted documents, in input order.
    pub fn documents(&self) -> &[SparseVector] {
        &self.documents
    }

    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }

    /// Cosine similarity of two vectors produced by this model.
    pub fn similarity(a: &SparseVector, b: &SparseVector) -> f64 {
        a.dot(b)
    }

    fn weigh(&self, terms: &[String]) -> SparseVector {
        let mut vector = SparseVector::new();
        for term in terms {
            if let Some(idf) = self.idf.get(term) {
                vector.add(term.as_str(), *idf);
            }
        }
        vector.normalized()
    }
}

fn terms(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| !is_stop_word(t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> TfidfVectorizer {
        TfidfVectorizer::fit(&[
            "When should I apply nitrogen?",
            "Which cover crops prevent erosion?",
            "How do I raise soil pH?",
        ])
    }

    #[test]
    fn vocabulary_excludes_stop_words() {
        let model = corpus();
        // apply nitrogen cover crops prevent erosion raise soil ph
        assert_eq!(model.vocabulary_size(), 9);
        assert!(model.transform("the of and").is_empty());
    }

    #[test]
    fn document_vectors_are_unit_length() {
        for doc in corpus().documents() {
            assert!((doc.norm() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn query_is_most_similar_to_matching_document() {
        let model = corpus();
        let query = model.transform("cover crops for erosion");
        let sims: Vec<f64> = model
            .documents()
            .iter()
            .map(|d| TfidfVectorizer::similarity(&query, d))
            .collect();
        assert!(sims[1] > 0.8);
        assert_eq!(sims[0], 0.0);
        assert_eq!(sims[2], 0.0);
    }

    #[test]
    fn unknown_terms_yield_empty_vector() {
        assert!(corpus().transform("zxqv plorth wibbly").is_empty());
    }

    #[test]
    fn rarer_terms_weigh_more() {
        let model = TfidfVectorizer::fit(&["soil nitrogen", "soil ph", "soil erosion"]);
        let v = model.transform("soil nitrogen");
        assert!(v.get("nitrogen") > v.get("soil"));
    }
}
