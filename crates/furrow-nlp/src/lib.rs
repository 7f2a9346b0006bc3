// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lightweight English text analysis for the Furrow classifier.
//!
//! Everything here is deterministic and table driven: a regex tokenizer, a
//! stop-word list, a suffix lemmatizer, a lexicon POS tagger, sparse
//! lemma/trigram document vectors and a TF-IDF vector space.
//!
//! Which of these are available is decided once at startup through
//! [`Capabilities`]; [`Analysis`] carries the per-question results so each
//! scorer reuses them instead of re-tokenizing.

pub mod lemma;
pub mod pos;
pub mod stopwords;
pub mod tfidf;
pub mod tokenize;
pub mod vectors;

pub use lemma::lemmatize;
pub use pos::{PosTag, tag};
pub use stopwords::{STOP_WORDS, is_stop_word};
pub use tfidf::TfidfVectorizer;
pub use tokenize::{contains_sequence, tokenize};
pub use vectors::{SparseVector, cosine_similarity, document_vector};

/// Optional analysis capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// POS tags and lemmas.
    pub linguistic: bool,
    /// Lemma/trigram document vectors.
    pub vectors: bool,
    /// TF-IDF vector space.
    pub tfidf: bool,
}

impl Capabilities {
    pub const ALL: Capabilities = Capabilities {
        linguistic: true,
        vectors: true,
        tfidf: true,
    };

    pub const NONE: Capabilities = Capabilities {
        linguistic: false,
        vectors: false,
        tfidf: false,
    };
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::ALL
    }
}

/// A tagged token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    pub tag: PosTag,
}

/// The analyzed form of one question.
#[derive(Debug, Clone)]
pub struct Analysis {
    text: String,
    tokens: Vec<String>,
    tagged: Option<Vec<Token>>,
    vector: Option<SparseVector>,
}

impl Analysis {
    /// Analyze `text` with whatever `capabilities` allow.
    pub fn new(text: &str, capabilities: Capabilities) -> Self {
        let tokens = tokenize(text);
        let tagged = capabilities.linguistic.then(|| {
            tokens
                .iter()
                .map(|t| Token {
                    text: t.clone(),
                    lemma: lemmatize(t),
                    tag: tag(t),
                })
                .collect()
        });
        let vector = capabilities.vectors.then(|| document_vector(&tokens));
        Self {
            text: text.to_string(),
            tokens,
            tagged,
            vector,
        }
    }

    /// The original text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lowercase tokens, stop words included.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Tagged tokens, when the linguistic capability is enabled.
    pub fn tagged(&self) -> Option<&[Token]> {
        self.tagged.as_deref()
    }

    /// Lemmas in token order, when the linguistic capability is enabled.
    pub fn lemmas(&self) -> Option<Vec<&str>> {
        self.tagged
            .as_ref()
            .map(|tagged| tagged.iter().map(|t| t.lemma.as_str()).collect())
    }

    /// Document vector, when the vector capability is enabled.
    pub fn vector(&self) -> Option<&SparseVector> {
        self.vector.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn full_analysis_tags_and_embeds() {
        let analysis = Analysis::new("Why are my soybean leaves turning yellow?", Capabilities::ALL);
        let tagged = analysis.tagged().unwrap();
        assert_eq!(tagged[0].tag, PosTag::Wh);
        let leaves = tagged.iter().find(|t| t.text == "leaves").unwrap();
        assert_eq!(leaves.lemma, "leaf");
        assert_eq!(leaves.tag, PosTag::Noun);
        assert!(analysis.vector().unwrap().get("w:soybean") > 0.0);
    }

    #[test]
    fn disabled_capabilities_are_absent() {
        let analysis = Analysis::new("How do I raise soil pH?", Capabilities::NONE);
        assert_eq!(analysis.tokens().len(), 6);
        assert!(analysis.tagged().is_none());
        assert!(analysis.lemmas().is_none());
        assert!(analysis.vector().is_none());
    }

    proptest! {
        #[test]
        fn analysis_never_panics_and_lemmas_align(text in "\\PC{0,200}") {
            let analysis = Analysis::new(&text, Capabilities::ALL);
            let lemmas = analysis.lemmas().unwrap();
            prop_assert_eq!(lemmas.len(), analysis.tokens().len());
        }
    }
}
