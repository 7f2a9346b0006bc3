// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Farmer question classification for the Furrow question router.
//!
//! This crate provides:
//! - [`QuestionClassifier`]: an ensemble of four scorers (pattern, semantic,
//!   keyword, linguistic) that maps free text to one of the twenty
//!   [`QuestionType`](furrow_core::QuestionType) categories
//! - [`corpus`]: the static per-category phrases, examples and patterns the
//!   scorers consult
//!
//! Classification never fails: a question with no signal at all is answered
//! with the `crop_selection` fallback at low confidence.

pub mod corpus;
pub mod ensemble;
pub mod keyword;
pub mod linguistic;
pub mod pattern;
pub mod scorer;
pub mod semantic;

pub use ensemble::{DetailedClassification, QuestionClassifier, ScorerOutcome};
pub use scorer::{CategoryScores, Scorer};
