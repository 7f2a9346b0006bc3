// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Routing of classified farmer questions to backend services.
//!
//! [`QuestionRouter`] maps each [`QuestionType`](furrow_core::QuestionType)
//! to a primary service, supporting services, a processing priority and an
//! estimated processing time.

pub mod router;
pub mod table;

pub use router::QuestionRouter;
pub use table::{DEFAULT_ROUTE, RouteSpec, builtin_route};
