// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Furrow question router.
//!
//! Defines the data model shared by the classifier, router and gateway:
//! the closed [`QuestionType`] enumeration, the validated [`QuestionRequest`],
//! the classifier and router outputs, and the [`FurrowError`] type.

pub mod error;
pub mod types;

pub use error::FurrowError;
pub use types::{
    ClassificationResult, Location, QuestionRequest, QuestionResponse, QuestionType,
    ResponseStatus, RoutingDecision,
};
