//! # green-core
//!
//! Grading and advisory-content engine for Greencheck.
//!
//! This crate provides the logic shared by every Greencheck crate:
//! - the ordinal [`Grade`](grade::Grade) scale and its per-grade display copy
//! - grade classification for diagnosis codes and quiz scores
//! - the built-in advice tables with their fallback chain
//! - the quiz state machine and its cancellable auto-advance
//! - the wire contract of the external analysis service
//! - view value objects for the result, advice, and quiz screens

pub mod advice;
pub mod classifier;
pub mod errors;
pub mod grade;
pub mod quiz;
pub mod report;
pub mod views;
