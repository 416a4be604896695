//! Cross-cutting error types for Greencheck.
//!
//! Errors raised by the grading and quiz logic. Transport errors live in
//! `green-client` and configuration errors in `green-config`; the CLI converges
//! them all through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by the core grading and quiz engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A grade code outside `A..=E` was given to the strict parser.
    #[error("Invalid grade code: '{0}' (expected one of A, B, C, D, E)")]
    InvalidGrade(String),

    /// An answer index does not exist on the current question.
    #[error("Answer {index} is out of range (question has {available} answers)")]
    AnswerOutOfRange { index: usize, available: usize },

    /// A question bank failed its structural checks.
    #[error("Invalid question bank: {0}")]
    InvalidQuestionBank(String),

    /// Data failed validation (negative metric, non-finite number, etc.).
    #[error("Validation error: {0}")]
    Validation(String),
}
