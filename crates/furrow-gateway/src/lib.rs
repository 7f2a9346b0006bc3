// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP API for the Furrow question router.
//!
//! Exposes classification and routing over JSON, plus `/health` and a
//! Prometheus `/metrics` endpoint. Validation failures are answered with
//! `422 Unprocessable Entity` and an `{"error": "..."}` body.

pub mod handlers;
pub mod server;

pub use handlers::{ApiError, ErrorResponse, HealthResponse, RouteParams};
pub use server::{GatewayState, HealthState, build_router, start_server};
