// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Furrow question router.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use std::collections::BTreeMap;

use furrow_core::{QuestionType, RoutingDecision};
use serde::{Deserialize, Serialize};

/// Top-level Furrow configuration.
///
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FurrowConfig {
    /// Service identity and logging.
    #[serde(default)]
    pub service: ServiceConfig,

    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Ensemble classifier settings.
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Optional NLP capabilities available to the scorers.
    #[serde(default)]
    pub nlp: NlpConfig,

    /// Prometheus metrics settings.
    #[serde(default)]
    pub metrics: MetricsConfig,

    /// Routing table settings.
    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Service identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Service name reported in logs and `/health`.
    #[serde(default = "default_service_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_service_name() -> String {
    "question-router".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

/// The four scoring strategies of the ensemble classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorerKind {
    /// Token-sequence patterns plus canonical-example vector similarity.
    Pattern,
    /// TF-IDF cosine similarity against the labeled example corpus.
    Semantic,
    /// Keyword phrase matching.
    Keyword,
    /// Part-of-speech and interrogative feature analysis.
    Linguistic,
}

impl ScorerKind {
    /// All scorers in ensemble order.
    pub const ALL: [ScorerKind; 4] = [
        ScorerKind::Pattern,
        ScorerKind::Semantic,
        ScorerKind::Keyword,
        ScorerKind::Linguistic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScorerKind::Pattern => "pattern",
            ScorerKind::Semantic => "semantic",
            ScorerKind::Keyword => "keyword",
            ScorerKind::Linguistic => "linguistic",
        }
    }
}

/// Ensemble classifier configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Scorers to include in the ensemble. Scorers whose NLP capability is
    /// disabled are dropped at construction regardless of this list.
    #[serde(default = "default_scorers")]
    pub scorers: Vec<ScorerKind>,

    /// Confidence reported by the no-signal fallback (0.2-0.3).
    #[serde(default = "default_fallback_confidence")]
    pub fallback_confidence: f64,

    /// Absolute score a runner-up must exceed to be listed as an alternative.
    #[serde(default = "default_alternative_min_score")]
    pub alternative_min_score: f64,

    /// Fraction of the top score a runner-up must exceed to be listed.
    #[serde(default = "default_alternative_relative_floor")]
    pub alternative_relative_floor: f64,

    /// Maximum number of alternatives reported.
    #[serde(default = "default_max_alternatives")]
    pub max_alternatives: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            scorers: default_scorers(),
            fallback_confidence: default_fallback_confidence(),
            alternative_min_score: default_alternative_min_score(),
            alternative_relative_floor: default_alternative_relative_floor(),
            max_alternatives: default_max_alternatives(),
        }
    }
}

fn default_scorers() -> Vec<ScorerKind> {
    ScorerKind::ALL.to_vec()
}

fn default_fallback_confidence() -> f64 {
    0.25
}

fn default_alternative_min_score() -> f64 {
    0.2
}

fn default_alternative_relative_floor() -> f64 {
    0.4
}

fn default_max_alternatives() -> usize {
    2
}

/// Optional NLP capabilities, resolved once at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NlpConfig {
    /// Tokenization into POS tags and lemmas. Required by the pattern and
    /// linguistic scorers and by the keyword scorer's lemma bonus.
    #[serde(default = "default_true")]
    pub linguistic: bool,

    /// Document vectors for canonical-example similarity.
    #[serde(default = "default_true")]
    pub vectors: bool,

    /// TF-IDF vector space. Required by the semantic scorer.
    #[serde(default = "default_true")]
    pub tfidf: bool,
}

impl Default for NlpConfig {
    fn default() -> Self {
        Self {
            linguistic: true,
            vectors: true,
            tfidf: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Prometheus metrics configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsConfig {
    /// Install the Prometheus recorder and serve `/metrics`.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Routing table configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingConfig {
    /// Entries replacing the built-in routing record for a question type.
    ///
    /// ```toml
    /// [routing.overrides.weather_impact]
    /// primary_service = "data-integration"
    /// secondary_services = ["recommendation-engine"]
    /// processing_priority = 1
    /// estimated_processing_time = 2
    /// ```
    #[serde(default)]
    pub overrides: BTreeMap<QuestionType, RoutingDecision>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_every_scorer_and_capability() {
        let config = FurrowConfig::default();
        assert_eq!(config.classifier.scorers, ScorerKind::ALL.to_vec());
        assert!(config.nlp.linguistic && config.nlp.vectors && config.nlp.tfidf);
        assert_eq!(config.classifier.fallback_confidence, 0.25);
        assert_eq!(config.classifier.max_alternatives, 2);
        assert!(config.routing.overrides.is_empty());
    }

    #[test]
    fn scorer_kinds_deserialize_snake_case() {
        let config: FurrowConfig = toml::from_str(
            r#"
[classifier]
scorers = ["keyword", "semantic"]
"#,
        )
        .unwrap();
        assert_eq!(
            config.classifier.scorers,
            vec![ScorerKind::Keyword, ScorerKind::Semantic]
        );
    }

    #[test]
    fn routing_overrides_key_by_question_type() {
        let config: FurrowConfig = toml::from_str(
            r#"
[routing.overrides.weather_impact]
primary_service = "weather-service"
processing_priority = 1
estimated_processing_time = 2
"#,
        )
        .unwrap();
        let entry = &config.routing.overrides[&QuestionType::WeatherImpact];
        assert_eq!(entry.primary_service, "weather-service");
        assert!(entry.secondary_services.is_empty());
    }

    #[test]
    fn unknown_question_type_in_overrides_is_rejected() {
        let result = toml::from_str::<FurrowConfig>(
            r#"
[routing.overrides.weed_control]
primary_service = "x"
processing_priority = 1
estimated_processing_time = 2
"#,
        );
        assert!(result.is_err());
    }
}
