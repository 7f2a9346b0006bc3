// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request, classification, and routing types shared across the Furrow workspace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::error::FurrowError;

/// Minimum question length, counted on the trimmed text.
pub const MIN_QUESTION_CHARS: usize = 10;

/// Maximum question length, counted on the raw text.
pub const MAX_QUESTION_CHARS: usize = 1000;

/// The closed set of farmer question categories.
///
/// Declaration order is significant: it breaks ties between equally scored
/// categories and orders the `/types` listing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    CropSelection,
    SoilFertility,
    CropRotation,
    NutrientDeficiency,
    FertilizerType,
    FertilizerApplication,
    FertilizerTiming,
    EnvironmentalImpact,
    CoverCrops,
    SoilPh,
    Micronutrients,
    PrecisionAgriculture,
    DroughtManagement,
    DeficiencyDetection,
    TillagePractices,
    CostEffectiveFertilizer,
    WeatherImpact,
    TestingIntegration,
    SustainableYield,
    GovernmentPrograms,
}

impl QuestionType {
    /// Category returned when no scorer produces any signal.
    pub const FALLBACK: QuestionType = QuestionType::CropSelection;

    /// All categories in declaration order.
    pub fn all() -> impl Iterator<Item = QuestionType> {
        QuestionType::iter()
    }

    /// The snake_case wire name.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Geographic position of the farm a question refers to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    fn validate(&self) -> Result<(), FurrowError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(FurrowError::Validation {
                field: "location.latitude",
                message: format!("must be between -90 and 90, got {}", self.latitude),
            });
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(FurrowError::Validation {
                field: "location.longitude",
                message: format!("must be between -180 and 180, got {}", self.longitude),
            });
        }
        Ok(())
    }
}

/// Unvalidated wire shape of a [`QuestionRequest`].
#[derive(Debug, Deserialize)]
struct QuestionRequestBody {
    question_text: String,
    #[serde(default)]
    user_id: Option<String>,
    #[serde(default)]
    farm_id: Option<String>,
    #[serde(default)]
    context: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    location: Option<Location>,
}

/// A farmer question submitted for classification.
///
/// Can only be obtained through [`QuestionRequest::new`] or deserialization,
/// both of which enforce the length and coordinate bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "QuestionRequestBody")]
pub struct QuestionRequest {
    question_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    farm_id: Option<String>,
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    context: serde_json::Map<String, serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<Location>,
}

impl QuestionRequest {
    /// Create a request carrying only question text.
    pub fn new(question_text: impl Into<String>) -> Result<Self, FurrowError> {
        Self::try_from(QuestionRequestBody {
            question_text: question_text.into(),
            user_id: None,
            farm_id: None,
            context: serde_json::Map::new(),
            location: None,
        })
    }

    /// Attach the asking user.
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Attach the farm the question is about.
    pub fn with_farm_id(mut self, farm_id: impl Into<String>) -> Self {
        self.farm_id = Some(farm_id.into());
        self
    }

    /// Attach a farm location, validating the coordinates.
    pub fn with_location(mut self, location: Location) -> Result<Self, FurrowError> {
        location.validate()?;
        self.location = Some(location);
        Ok(self)
    }

    /// The trimmed question text.
    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn farm_id(&self) -> Option<&str> {
        self.farm_id.as_deref()
    }

    pub fn context(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.context
    }

    pub fn location(&self) -> Option<Location> {
        self.location
    }
}

impl TryFrom<QuestionRequestBody> for QuestionRequest {
    type Error = FurrowError;

    fn try_from(body: QuestionRequestBody) -> Result<Self, Self::Error> {
        let raw_len = body.question_text.chars().count();
        if raw_len > MAX_QUESTION_CHARS {
            return Err(FurrowError::Validation {
                field: "question_text",
                message: format!("must be at most {MAX_QUESTION_CHARS} characters, got {raw_len}"),
            });
        }

        let trimmed = body.question_text.trim();
        let trimmed_len = trimmed.chars().count();
        if trimmed_len < MIN_QUESTION_CHARS {
            return Err(FurrowError::Validation {
                field: "question_text",
                message: format!(
                    "must be at least {MIN_QUESTION_CHARS} characters after trimming, got {trimmed_len}"
                ),
            });
        }

        if let Some(location) = &body.location {
            location.validate()?;
        }

        Ok(Self {
            question_text: trimmed.to_string(),
            user_id: body.user_id,
            farm_id: body.farm_id,
            context: body.context,
            location: body.location,
        })
    }
}

/// Output of the question classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// The winning category.
    pub question_type: QuestionType,
    /// Capped combined score of the winner (0.0-1.0). Not a calibrated probability.
    pub confidence_score: f64,
    /// Up to two runner-up categories, highest score first.
    pub alternative_types: Vec<QuestionType>,
    /// Which scoring strategies contributed to the decision.
    pub reasoning: String,
}

/// Where a classified question should be processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingDecision {
    /// Authoritative downstream service.
    pub primary_service: String,
    /// Supporting services, in the order they should be consulted.
    #[serde(default)]
    pub secondary_services: Vec<String>,
    /// 1 (highest) to 5 (lowest).
    pub processing_priority: u8,
    /// Expected processing time in seconds.
    pub estimated_processing_time: u32,
}

/// Outcome label carried on a [`QuestionResponse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    /// At least one scorer produced a signal.
    Classified,
    /// No scorer produced a signal; the default category was used.
    Fallback,
}

/// Response envelope for a classified and routed question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub request_id: String,
    pub classification: ClassificationResult,
    pub routing: RoutingDecision,
    pub status: ResponseStatus,
    pub created_at: DateTime<Utc>,
}

impl QuestionResponse {
    /// Build a response with a fresh UUIDv4 request id stamped now.
    pub fn new(
        classification: ClassificationResult,
        routing: RoutingDecision,
        status: ResponseStatus,
    ) -> Self {
        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            classification,
            routing,
            status,
            created_at: Utc::now(),
        }
    }
}
