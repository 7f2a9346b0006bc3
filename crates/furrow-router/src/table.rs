// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in routing table.

use furrow_core::QuestionType;

pub const RECOMMENDATION_ENGINE: &str = "recommendation-engine";
pub const DATA_INTEGRATION: &str = "data-integration";
pub const AI_AGENT: &str = "ai-agent";
pub const IMAGE_ANALYSIS: &str = "image-analysis";

/// A static routing record.
#[derive(Debug, Clone, Copy)]
pub struct RouteSpec {
    pub primary: &'static str,
    pub secondary: &'static [&'static str],
    /// 1 (highest) to 5.
    pub priority: u8,
    /// Estimated processing time in seconds.
    pub seconds: u32,
}

/// Route used for any type missing from the table.
pub const DEFAULT_ROUTE: RouteSpec = RouteSpec {
    primary: RECOMMENDATION_ENGINE,
    secondary: &[AI_AGENT],
    priority: 3,
    seconds: 5,
};

/// The built-in route of a question type.
pub fn builtin_route(question_type: QuestionType) -> RouteSpec {
    use QuestionType::*;

    let (primary, secondary, priority, seconds): (_, &'static [&'static str], _, _) =
        match question_type {
            CropSelection => (RECOMMENDATION_ENGINE, &[DATA_INTEGRATION, AI_AGENT], 2, 5),
            SoilFertility => (RECOMMENDATION_ENGINE, &[DATA_INTEGRATION], 2, 4),
            CropRotation => (RECOMMENDATION_ENGINE, &[DATA_INTEGRATION, AI_AGENT], 3, 5),
            NutrientDeficiency => (RECOMMENDATION_ENGINE, &[IMAGE_ANALYSIS, DATA_INTEGRATION], 1, 6),
            FertilizerType => (RECOMMENDATION_ENGINE, &[DATA_INTEGRATION], 2, 4),
            FertilizerApplication => (RECOMMENDATION_ENGINE, &[DATA_INTEGRATION], 2, 4),
            FertilizerTiming => (RECOMMENDATION_ENGINE, &[DATA_INTEGRATION], 2, 3),
            EnvironmentalImpact => (RECOMMENDATION_ENGINE, &[DATA_INTEGRATION, AI_AGENT], 3, 6),
            CoverCrops => (RECOMMENDATION_ENGINE, &[DATA_INTEGRATION], 3, 5),
            SoilPh => (RECOMMENDATION_ENGINE, &[DATA_INTEGRATION], 2, 3),
            Micronutrients => (RECOMMENDATION_ENGINE, &[DATA_INTEGRATION], 3, 4),
            PrecisionAgriculture => (AI_AGENT, &[RECOMMENDATION_ENGINE, DATA_INTEGRATION], 4, 8),
            DroughtManagement => (RECOMMENDATION_ENGINE, &[DATA_INTEGRATION], 2, 5),
            DeficiencyDetection => (IMAGE_ANALYSIS, &[RECOMMENDATION_ENGINE], 1, 10),
            TillagePractices => (RECOMMENDATION_ENGINE, &[AI_AGENT], 3, 4),
            CostEffectiveFertilizer => (RECOMMENDATION_ENGINE, &[DATA_INTEGRATION], 3, 5),
            WeatherImpact => (DATA_INTEGRATION, &[RECOMMENDATION_ENGINE], 2, 3),
            TestingIntegration => (DATA_INTEGRATION, &[RECOMMENDATION_ENGINE], 3, 4),
            SustainableYield => (RECOMMENDATION_ENGINE, &[AI_AGENT, DATA_INTEGRATION], 4, 7),
            GovernmentPrograms => (DATA_INTEGRATION, &[AI_AGENT], 5, 3),
        };

    RouteSpec {
        primary,
        secondary,
        priority,
        seconds,
    }
}
