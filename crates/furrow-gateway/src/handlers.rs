// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the question API.

use std::time::Instant;

use axum::{
    Json,
    body::Bytes,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use furrow_core::{
    ClassificationResult, FurrowError, QuestionRequest, QuestionResponse, QuestionType,
    ResponseStatus, RoutingDecision,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::server::GatewayState;

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

/// Question type selector for POST /route-only, from query or body.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteParams {
    #[serde(default)]
    pub question_type: Option<QuestionType>,
}

/// A request failure rendered as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<FurrowError> for ApiError {
    fn from(err: FurrowError) -> Self {
        let status = match err {
            FurrowError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// POST /api/v1/questions/classify
///
/// Classifies a question, routes it, and wraps both in a response envelope.
pub async fn post_classify(
    State(state): State<GatewayState>,
    body: Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let Json(request) = body?;
    let started = Instant::now();

    let detailed = state.classifier.classify_detailed(request.question_text());
    let classification = detailed.result;
    let routing = state.router.route(classification.question_type);
    let status = if detailed.fallback {
        ResponseStatus::Fallback
    } else {
        ResponseStatus::Classified
    };

    furrow_prometheus::record_classification(classification.question_type, detailed.fallback);
    furrow_prometheus::record_route(&routing.primary_service);
    furrow_prometheus::record_latency(started.elapsed().as_secs_f64());

    let response = QuestionResponse::new(classification, routing, status);
    info!(
        request_id = %response.request_id,
        user_id = request.user_id().unwrap_or("-"),
        question_type = %response.classification.question_type,
        confidence = response.classification.confidence_score,
        primary_service = %response.routing.primary_service,
        status = %response.status,
        "question processed"
    );
    Ok(Json(response))
}

/// GET /api/v1/questions/types
pub async fn get_types() -> Json<Vec<&'static str>> {
    Json(QuestionType::all().map(|t| t.as_str()).collect())
}

/// POST /api/v1/questions/classify-only
pub async fn post_classify_only(
    State(state): State<GatewayState>,
    body: Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<Json<ClassificationResult>, ApiError> {
    let Json(request) = body?;
    let detailed = state.classifier.classify_detailed(request.question_text());
    furrow_prometheus::record_classification(detailed.result.question_type, detailed.fallback);
    Ok(Json(detailed.result))
}

/// POST /api/v1/questions/route-only
///
/// Takes the question type from `?question_type=` or from a
/// `{"question_type": "..."}` body. The query parameter wins when both are set.
pub async fn post_route_only(
    State(state): State<GatewayState>,
    query: Result<Query<RouteParams>, QueryRejection>,
    body: Bytes,
) -> Result<Json<RoutingDecision>, ApiError> {
    let Query(params) = query?;
    let question_type = match params.question_type {
        Some(question_type) => question_type,
        None if body.is_empty() => {
            return Err(ApiError::unprocessable("question_type is required"));
        }
        None => serde_json::from_slice::<RouteParams>(&body)
            .map_err(|e| ApiError::unprocessable(format!("invalid request body: {e}")))?
            .question_type
            .ok_or_else(|| ApiError::unprocessable("question_type is required"))?,
    };

    let decision = state.router.route(question_type);
    debug!(question_type = %question_type, "route-only request");
    furrow_prometheus::record_route(&decision.primary_service);
    Ok(Json(decision))
}

/// GET /health
pub async fn get_health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.health.start_time.elapsed().as_secs(),
    })
}

/// GET /metrics
///
/// Prometheus text format, or 404 when metrics are disabled.
pub async fn get_metrics(State(state): State<GatewayState>) -> Response {
    match &state.health.prometheus_render {
        Some(render) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            render(),
        )
            .into_response(),
        None => ApiError {
            status: StatusCode::NOT_FOUND,
            message: "metrics are disabled".to_string(),
        }
        .into_response(),
    }
}
