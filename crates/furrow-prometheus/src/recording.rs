// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Metric registration and recording helpers.

use furrow_core::QuestionType;
use metrics::{describe_counter, describe_gauge, describe_histogram};

/// Register all Furrow metric descriptions.
///
/// Called once at startup after the recorder is installed.
pub fn register_metrics() {
    describe_counter!(
        "furrow_questions_classified_total",
        "Questions classified, by question type"
    );
    describe_counter!(
        "furrow_classification_fallbacks_total",
        "Questions answered by the no-signal fallback"
    );
    describe_counter!(
        "furrow_questions_routed_total",
        "Questions routed, by primary service"
    );
    describe_histogram!(
        "furrow_classification_latency_seconds",
        "Classification and routing latency in seconds"
    );
    describe_gauge!(
        "furrow_memory_heap_bytes",
        "Bytes allocated by the application heap"
    );
    describe_gauge!(
        "furrow_memory_resident_bytes",
        "Bytes in physically resident allocator pages"
    );
}

/// Record one classified question.
pub fn record_classification(question_type: QuestionType, fallback: bool) {
    metrics::counter!(
        "furrow_questions_classified_total",
        "question_type" => question_type.as_str()
    )
    .increment(1);
    if fallback {
        metrics::counter!("furrow_classification_fallbacks_total").increment(1);
    }
}

/// Record one routing decision.
pub fn record_route(primary_service: &str) {
    metrics::counter!(
        "furrow_questions_routed_total",
        "service" => primary_service.to_string()
    )
    .increment(1);
}

/// Record pipeline latency.
pub fn record_latency(seconds: f64) {
    metrics::histogram!("furrow_classification_latency_seconds").record(seconds);
}

/// Set the heap allocation gauge.
pub fn set_memory_heap(bytes: f64) {
    metrics::gauge!("furrow_memory_heap_bytes").set(bytes);
}

/// Set the resident allocator pages gauge.
pub fn set_memory_resident(bytes: f64) {
    metrics::gauge!("furrow_memory_resident_bytes").set(bytes);
}
