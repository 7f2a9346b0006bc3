// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP-level tests for the question API.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use furrow_classifier::QuestionClassifier;
use furrow_config::model::{ClassifierConfig, NlpConfig};
use furrow_core::{ClassificationResult, QuestionResponse, ResponseStatus, RoutingDecision};
use furrow_gateway::{GatewayState, HealthState, build_router};
use furrow_router::QuestionRouter;
use serde_json::Value;
use tower::ServiceExt;

fn app_with_metrics(render: Option<Arc<dyn Fn() -> String + Send + Sync>>) -> Router {
    build_router(GatewayState {
        classifier: Arc::new(QuestionClassifier::new(
            &ClassifierConfig::default(),
            &NlpConfig::default(),
        )),
        router: Arc::new(QuestionRouter::default()),
        health: HealthState::new(render),
    })
}

fn app() -> Router {
    app_with_metrics(None)
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
}

#[tokio::test]
async fn classify_returns_full_envelope() {
    let response = app()
        .oneshot(post_json(
            "/api/v1/questions/classify",
            r#"{"question_text": "What cover crops work best in my sandy soil for erosion control?", "user_id": "farmer-7"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let envelope: QuestionResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(envelope.classification.question_type.as_str(), "cover_crops");
    assert_eq!(envelope.status, ResponseStatus::Classified);
    assert_eq!(envelope.routing.primary_service, "recommendation-engine");
    assert_eq!(envelope.request_id.len(), 36);
}

#[tokio::test]
async fn classify_reports_fallback_status() {
    let response = app()
        .oneshot(post_json(
            "/api/v1/questions/classify",
            r#"{"question_text": "zxqv plorth wibbly grznak ftang"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["status"], "fallback");
    assert_eq!(json["classification"]["question_type"], "crop_selection");
    assert_eq!(json["routing"]["processing_priority"], 2);
}

#[tokio::test]
async fn short_question_is_unprocessable() {
    let response = app()
        .oneshot(post_json(
            "/api/v1/questions/classify",
            r#"{"question_text": "   corn?   "}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(json["error"].as_str().unwrap().contains("question_text"));
}

#[tokio::test]
async fn out_of_range_latitude_is_unprocessable() {
    let response = app()
        .oneshot(post_json(
            "/api/v1/questions/classify-only",
            r#"{"question_text": "When should I plant soybeans?", "location": {"latitude": 95.0, "longitude": 10.0}}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn malformed_json_is_a_client_error() {
    let response = app()
        .oneshot(post_json("/api/v1/questions/classify", "{not json"))
        .await
        .unwrap();
    assert!(response.status().is_client_error());
    let json: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn types_lists_all_twenty() {
    let response = app().oneshot(get("/api/v1/questions/types")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let types: Vec<String> = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(types.len(), 20);
    assert_eq!(types[0], "crop_selection");
    assert_eq!(types[19], "government_programs");
}

#[tokio::test]
async fn classify_only_returns_classification() {
    let response = app()
        .oneshot(post_json(
            "/api/v1/questions/classify-only",
            r#"{"question_text": "When should I apply nitrogen fertilizer to my corn field?"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let result: ClassificationResult =
        serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(result.question_type.as_str(), "fertilizer_timing");
}

#[tokio::test]
async fn route_only_from_body() {
    let response = app()
        .oneshot(post_json(
            "/api/v1/questions/route-only",
            r#"{"question_type": "deficiency_detection"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let decision: RoutingDecision = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(decision.primary_service, "image-analysis");
    assert_eq!(decision.estimated_processing_time, 10);
}

#[tokio::test]
async fn route_only_from_query() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/questions/route-only?question_type=weather_impact")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let decision: RoutingDecision = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(decision.primary_service, "data-integration");
}

#[tokio::test]
async fn route_only_without_type_is_unprocessable() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/questions/route-only")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn route_only_rejects_unknown_type() {
    let response = app()
        .oneshot(post_json(
            "/api/v1/questions/route-only",
            r#"{"question_type": "weed_control"}"#,
        ))
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn health_reports_ok() {
    let response = app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["status"], "ok");
    assert!(json["uptime_secs"].is_u64());
}

#[tokio::test]
async fn metrics_disabled_is_not_found() {
    let response = app().oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn metrics_enabled_renders_text() {
    let render: Arc<dyn Fn() -> String + Send + Sync> =
        Arc::new(|| "furrow_questions_classified_total 3\n".to_string());
    let response = app_with_metrics(Some(render))
        .oneshot(get("/metrics"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let text = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(text.contains("furrow_questions_classified_total"));
}
