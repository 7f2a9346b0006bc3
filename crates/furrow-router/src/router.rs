// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Question-type routing with configurable per-type overrides.
//!
//! The table is built once from the built-in routes, with any configured
//! overrides applied on top, and never changes afterwards.

use std::collections::HashMap;

use furrow_config::model::RoutingConfig;
use furrow_core::{QuestionType, RoutingDecision};
use strum::IntoEnumIterator;
use tracing::{debug, info};

use crate::table::{DEFAULT_ROUTE, RouteSpec, builtin_route};

impl From<RouteSpec> for RoutingDecision {
    fn from(route: RouteSpec) -> Self {
        RoutingDecision {
            primary_service: route.primary.to_string(),
            secondary_services: route.secondary.iter().map(|s| s.to_string()).collect(),
            processing_priority: route.priority,
            estimated_processing_time: route.seconds,
        }
    }
}

/// Maps a classified question type to the services that should handle it.
pub struct QuestionRouter {
    table: HashMap<QuestionType, RoutingDecision>,
    default: RoutingDecision,
}

impl QuestionRouter {
    /// Build the routing table, applying configured overrides.
    pub fn new(config: &RoutingConfig) -> Self {
        let mut table: HashMap<QuestionType, RoutingDecision> = QuestionType::iter()
            .map(|question_type| (question_type, builtin_route(question_type).into()))
            .collect();

        for (question_type, decision) in &config.overrides {
            info!(
                question_type = %question_type,
                primary_service = %decision.primary_service,
                "routing override applied"
            );
            table.insert(*question_type, decision.clone());
        }

        Self::from_table(table)
    }

    /// Build a router over an explicit table. Types missing from it get the
    /// default decision.
    pub fn from_table(table: HashMap<QuestionType, RoutingDecision>) -> Self {
        Self {
            table,
            default: DEFAULT_ROUTE.into(),
        }
    }

    /// Routing decision for a question type.
    pub fn route(&self, question_type: QuestionType) -> RoutingDecision {
        let decision = self.table.get(&question_type).cloned().unwrap_or_else(|| {
            debug!(question_type = %question_type, "no route entry, using default");
            self.default.clone()
        });
        debug!(
            question_type = %question_type,
            primary_service = %decision.primary_service,
            priority = decision.processing_priority,
            "question routed"
        );
        decision
    }

    /// The decision used for types without an entry.
    pub fn default_decision(&self) -> &RoutingDecision {
        &self.default
    }

    /// Whether the table has an explicit entry for `question_type`.
    pub fn has_route(&self, question_type: QuestionType) -> bool {
        self.table.contains_key(&question_type)
    }
}

impl Default for QuestionRouter {
    fn default() -> Self {
        Self::new(&RoutingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{AI_AGENT, DATA_INTEGRATION, IMAGE_ANALYSIS, RECOMMENDATION_ENGINE};

    #[test]
    fn every_type_has_an_entry() {
        let router = QuestionRouter::default();
        for question_type in QuestionType::iter() {
            assert!(router.has_route(question_type), "{question_type}");
        }
    }

    #[test]
    fn entries_are_well_formed() {
        let router = QuestionRouter::default();
        for question_type in QuestionType::iter() {
            let decision = router.route(question_type);
            assert!(!decision.primary_service.is_empty());
            assert!((1..=5).contains(&decision.processing_priority));
            assert!(decision.estimated_processing_time > 0);
            assert!(!decision.secondary_services.contains(&decision.primary_service));
        }
    }

    #[test]
    fn routing_is_idempotent() {
        let router = QuestionRouter::default();
        for question_type in QuestionType::iter() {
            assert_eq!(router.route(question_type), router.route(question_type));
        }
    }

    #[test]
    fn image_detection_goes_to_image_analysis() {
        let decision = QuestionRouter::default().route(QuestionType::DeficiencyDetection);
        assert_eq!(decision.primary_service, IMAGE_ANALYSIS);
        assert!(decision.secondary_services.iter().any(|s| s == RECOMMENDATION_ENGINE));
        assert_eq!(decision.processing_priority, 1);
        assert_eq!(decision.estimated_processing_time, 10);
    }

    #[test]
    fn nutrient_deficiency_consults_image_analysis() {
        let decision = QuestionRouter::default().route(QuestionType::NutrientDeficiency);
        assert_eq!(decision.primary_service, RECOMMENDATION_ENGINE);
        assert!(decision.secondary_services.iter().any(|s| s == IMAGE_ANALYSIS));
    }

    #[test]
    fn government_programs_are_lowest_priority() {
        let decision = QuestionRouter::default().route(QuestionType::GovernmentPrograms);
        assert_eq!(decision.primary_service, DATA_INTEGRATION);
        assert_eq!(decision.secondary_services, vec![AI_AGENT.to_string()]);
        assert_eq!(decision.processing_priority, 5);
    }

    #[test]
    fn missing_entry_uses_default() {
        let router = QuestionRouter::from_table(HashMap::new());
        let decision = router.route(QuestionType::SoilPh);
        assert_eq!(&decision, router.default_decision());
        assert_eq!(decision.primary_service, RECOMMENDATION_ENGINE);
        assert_eq!(decision.secondary_services, vec![AI_AGENT.to_string()]);
        assert_eq!(decision.processing_priority, 3);
        assert_eq!(decision.estimated_processing_time, 5);
    }

    #[test]
    fn overrides_replace_builtin_entries() {
        let mut config = RoutingConfig::default();
        config.overrides.insert(
            QuestionType::WeatherImpact,
            RoutingDecision {
                primary_service: "weather-service".to_string(),
                secondary_services: vec![],
                processing_priority: 1,
                estimated_processing_time: 2,
            },
        );
        let router = QuestionRouter::new(&config);
        assert_eq!(
            router.route(QuestionType::WeatherImpact).primary_service,
            "weather-service"
        );
        assert_eq!(
            router.route(QuestionType::SoilPh),
            QuestionRouter::default().route(QuestionType::SoilPh)
        );
    }
}
