// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One-shot commands: `classify`, `route`, `types` and `config`.
//!
//! Each renders its output to a `String` so the caller decides where it goes.

use std::fmt::Write;
use std::str::FromStr;

use furrow_classifier::QuestionClassifier;
use furrow_config::FurrowConfig;
use furrow_core::{FurrowError, QuestionRequest, QuestionType};
use furrow_router::QuestionRouter;

/// Classify one question and render the result.
///
/// `explain` appends the per-scorer breakdown; `json` emits the
/// classification and routing as a JSON object instead of text.
pub fn classify(
    config: &FurrowConfig,
    question: &str,
    explain: bool,
    json: bool,
) -> Result<String, FurrowError> {
    let request = QuestionRequest::new(question)?;
    let classifier = QuestionClassifier::new(&config.classifier, &config.nlp);
    let router = QuestionRouter::new(&config.routing);

    let detailed = classifier.classify_detailed(request.question_text());
    let routing = router.route(detailed.result.question_type);

    if json {
        let value = serde_json::json!({
            "classification": detailed.result,
            "routing": routing,
            "fallback": detailed.fallback,
        });
        return serde_json::to_string_pretty(&value)
            .map_err(|e| FurrowError::Internal(format!("failed to encode result: {e}")));
    }

    let result = &detailed.result;
    let mut out = String::new();
    let _ = writeln!(out, "question type: {}", result.question_type);
    let _ = writeln!(out, "confidence:    {:.2}", result.confidence_score);
    if !result.alternative_types.is_empty() {
        let alternatives: Vec<&str> = result.alternative_types.iter().map(|t| t.as_str()).collect();
        let _ = writeln!(out, "alternatives:  {}", alternatives.join(", "));
    }
    let _ = writeln!(out, "reasoning:     {}", result.reasoning);
    let _ = writeln!(
        out,
        "route:         {} (priority {}, ~{}s)",
        routing.primary_service, routing.processing_priority, routing.estimated_processing_time
    );

    if explain {
        let _ = writeln!(out, "\nscorer breakdown:");
        for outcome in &detailed.breakdown {
            match &outcome.scores {
                None => {
                    let _ = writeln!(out, "  {:<11} failed", outcome.kind.as_str());
                }
                Some(scores) if scores.is_empty() => {
                    let _ = writeln!(out, "  {:<11} no signal", outcome.kind.as_str());
                }
                Some(scores) => {
                    let mut ranked: Vec<_> = scores.iter().collect();
                    ranked.sort_by(|a, b| b.1.total_cmp(a.1));
                    let top: Vec<String> = ranked
                        .iter()
                        .take(3)
                        .map(|(t, s)| format!("{t}={s:.3}"))
                        .collect();
                    let _ = writeln!(out, "  {:<11} {}", outcome.kind.as_str(), top.join(" "));
                }
            }
        }
    }
    Ok(out)
}

/// Render the routing decision for a question type name.
pub fn route(config: &FurrowConfig, question_type: &str) -> Result<String, FurrowError> {
    let question_type =
        QuestionType::from_str(question_type).map_err(|_| FurrowError::Validation {
            field: "question_type",
            message: format!("unknown question type `{question_type}`; run `furrow types`"),
        })?;
    let decision = QuestionRouter::new(&config.routing).route(question_type);
    serde_json::to_string_pretty(&decision)
        .map_err(|e| FurrowError::Internal(format!("failed to encode decision: {e}")))
}

/// List every question type, one per line.
pub fn types() -> String {
    QuestionType::all().map(|t| format!("{t}\n")).collect()
}

/// Render the effective configuration as TOML.
pub fn show_config(config: &FurrowConfig) -> Result<String, FurrowError> {
    toml::to_string_pretty(config)
        .map_err(|e| FurrowError::Config(format!("failed to render configuration: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_renders_type_and_route() {
        let out = classify(
            &FurrowConfig::default(),
            "How do I raise the pH of my acidic soil?",
            false,
            false,
        )
        .unwrap();
        assert!(out.contains("question type: soil_ph"));
        assert!(out.contains("route:         recommendation-engine"));
        assert!(!out.contains("scorer breakdown"));
    }

    #[test]
    fn classify_explain_lists_each_scorer() {
        let out = classify(
            &FurrowConfig::default(),
            "How do I raise the pH of my acidic soil?",
            true,
            false,
        )
        .unwrap();
        for name in ["pattern", "semantic", "keyword", "linguistic"] {
            assert!(out.contains(name), "missing {name}");
        }
    }

    #[test]
    fn classify_json_is_parseable() {
        let out = classify(
            &FurrowConfig::default(),
            "zxqv plorth wibbly grznak ftang",
            false,
            true,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["fallback"], true);
        assert_eq!(value["classification"]["question_type"], "crop_selection");
    }

    #[test]
    fn classify_rejects_short_question() {
        let err = classify(&FurrowConfig::default(), "corn?", false, false).unwrap_err();
        assert!(matches!(err, FurrowError::Validation { field: "question_text", .. }));
    }

    #[test]
    fn route_by_name() {
        let out = route(&FurrowConfig::default(), "deficiency_detection").unwrap();
        assert!(out.contains("image-analysis"));
    }

    #[test]
    fn route_unknown_name_fails() {
        assert!(route(&FurrowConfig::default(), "weed_control").is_err());
    }

    #[test]
    fn types_lists_twenty_lines() {
        assert_eq!(types().lines().count(), 20);
    }

    #[test]
    fn config_renders_as_toml() {
        let out = show_config(&FurrowConfig::default()).unwrap();
        assert!(out.contains("[server]"));
        assert!(out.contains("port = 8000"));
    }
}
