// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks semantic constraints serde cannot express: address syntax,
//! score floors within range, routing priorities within 1-5.

use std::collections::HashSet;

use crate::diagnostic::ConfigError;
use crate::model::FurrowConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration.
///
/// Collects every violation instead of failing fast.
pub fn validate_config(config: &FurrowConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    let level = config.service.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        fail(format!(
            "service.log_level `{}` must be one of {}",
            config.service.log_level,
            LOG_LEVELS.join(", ")
        ));
    }

    let host = config.server.host.trim();
    if host.is_empty() {
        fail("server.host must not be empty".to_string());
    } else {
        let is_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-');
        if !is_ip && !is_hostname {
            fail(format!("server.host `{host}` is not a valid IP address or hostname"));
        }
    }

    let classifier = &config.classifier;
    if !(0.2..=0.3).contains(&classifier.fallback_confidence) {
        fail(format!(
            "classifier.fallback_confidence must be between 0.2 and 0.3, got {}",
            classifier.fallback_confidence
        ));
    }
    if !(0.0..=1.0).contains(&classifier.alternative_min_score) {
        fail(format!(
            "classifier.alternative_min_score must be between 0 and 1, got {}",
            classifier.alternative_min_score
        ));
    }
    if !(0.0..=1.0).contains(&classifier.alternative_relative_floor) {
        fail(format!(
            "classifier.alternative_relative_floor must be between 0 and 1, got {}",
            classifier.alternative_relative_floor
        ));
    }
    if classifier.max_alternatives > 2 {
        fail(format!(
            "classifier.max_alternatives must be at most 2, got {}",
            classifier.max_alternatives
        ));
    }

    let mut seen = HashSet::new();
    for kind in &classifier.scorers {
        if !seen.insert(kind) {
            fail(format!("classifier.scorers lists `{}` more than once", kind.as_str()));
        }
    }

    for (question_type, entry) in &config.routing.overrides {
        if entry.primary_service.trim().is_empty() {
            fail(format!(
                "routing.overrides.{question_type}.primary_service must not be empty"
            ));
        }
        if !(1..=5).contains(&entry.processing_priority) {
            fail(format!(
                "routing.overrides.{question_type}.processing_priority must be between 1 and 5, got {}",
                entry.processing_priority
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScorerKind;
    use furrow_core::{QuestionType, RoutingDecision};

    fn has_message(errors: &[ConfigError], needle: &str) -> bool {
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains(needle)))
    }

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&FurrowConfig::default()).is_ok());
    }

    #[test]
    fn fallback_confidence_outside_band_fails() {
        let mut config = FurrowConfig::default();
        config.classifier.fallback_confidence = 0.5;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "fallback_confidence"));
    }

    #[test]
    fn bad_log_level_fails() {
        let mut config = FurrowConfig::default();
        config.service.log_level = "verbose".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "log_level"));
    }

    #[test]
    fn invalid_host_fails() {
        let mut config = FurrowConfig::default();
        config.server.host = "local host!".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "server.host"));
    }

    #[test]
    fn duplicate_scorers_fail() {
        let mut config = FurrowConfig::default();
        config.classifier.scorers = vec![ScorerKind::Keyword, ScorerKind::Keyword];
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "more than once"));
    }

    #[test]
    fn empty_scorer_list_is_allowed() {
        let mut config = FurrowConfig::default();
        config.classifier.scorers.clear();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn routing_override_priority_out_of_range_fails() {
        let mut config = FurrowConfig::default();
        config.routing.overrides.insert(
            QuestionType::SoilPh,
            RoutingDecision {
                primary_service: "recommendation-engine".to_string(),
                secondary_services: vec![],
                processing_priority: 9,
                estimated_processing_time: 3,
            },
        );
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "routing.overrides.soil_ph.processing_priority"));
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = FurrowConfig::default();
        config.server.host = String::new();
        config.classifier.fallback_confidence = 0.9;
        config.classifier.max_alternatives = 5;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
