// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Furrow question router.

use thiserror::Error;

/// The primary error type shared by every Furrow crate.
#[derive(Debug, Error)]
pub enum FurrowError {
    /// Configuration errors (invalid TOML, out-of-range values).
    #[error("configuration error: {0}")]
    Config(String),

    /// A request field failed validation.
    #[error("invalid {field}: {message}")]
    Validation { field: &'static str, message: String },

    /// A scoring strategy failed while scoring a question.
    ///
    /// Never surfaces to callers of the classifier; the ensemble logs it and
    /// treats the scorer as silent.
    #[error("scorer `{scorer}` failed: {message}")]
    Scorer { scorer: &'static str, message: String },

    /// HTTP server errors (bind failure, serve loop error).
    #[error("server error: {message}")]
    Server {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
