//! Grade classification.
//!
//! Two sources feed the grade scale:
//!
//! - **Diagnosis**: the analysis service already computed a grade code. This
//!   path only validates it; anything outside `A..=E` is coerced to
//!   [`Grade::FALLBACK`] (`C`) and logged.
//! - **Quiz**: the local score is turned into a percentage and bucketed by
//!   fixed thresholds, highest first, each a closed lower bound.
//!
//! The quiz scale stops at `D`: grade `E` is never produced from a quiz
//! score. The diagnosis scale uses all five grades. The asymmetry is
//! intentional and kept as-is.

use crate::grade::Grade;

/// Minimum quiz percentage for each grade, evaluated top to bottom.
pub const QUIZ_THRESHOLDS: [(u32, Grade); 3] = [(80, Grade::A), (60, Grade::B), (40, Grade::C)];

/// Grade given to a quiz score below every threshold.
pub const QUIZ_FLOOR: Grade = Grade::D;

/// Raw signal to classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeSource<'a> {
    /// Grade code as sent by the analysis service (`niveau`).
    Diagnosis(&'a str),
    /// Final quiz score out of `total` questions.
    Quiz { score: u32, total: u32 },
}

/// Classify any supported source onto the grade scale.
#[must_use]
pub fn classify(source: GradeSource<'_>) -> Grade {
    match source {
        GradeSource::Diagnosis(code) => classify_code(code),
        GradeSource::Quiz { score, total } => classify_quiz(score, total),
    }
}

/// Validate an upstream grade code, coercing unknown values to `C`.
#[must_use]
pub fn classify_code(code: &str) -> Grade {
    code.parse().unwrap_or_else(|_| {
        tracing::warn!(code, fallback = %Grade::FALLBACK, "unrecognized grade code");
        Grade::FALLBACK
    })
}

/// Bucket a quiz score into `A..=D`.
///
/// Compares `score * 100` against `threshold * total` so boundaries such as
/// 2/5 = 40% are exact. A quiz with no questions grades as `D`.
#[must_use]
pub fn classify_quiz(score: u32, total: u32) -> Grade {
    if total == 0 {
        return QUIZ_FLOOR;
    }
    let scaled = u64::from(score) * 100;
    QUIZ_THRESHOLDS
        .iter()
        .find(|(threshold, _)| scaled >= u64::from(*threshold) * u64::from(total))
        .map_or(QUIZ_FLOOR, |(_, grade)| *grade)
}

/// Quiz percentage for display (`0.0` when there are no questions).
#[must_use]
pub fn quiz_percentage(score: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    f64::from(score) / f64::from(total) * 100.0
}

/// Encouragement shown at the end of the quiz.
#[must_use]
pub const fn quiz_message(grade: Grade) -> &'static str {
    match grade {
        Grade::A => "Excellent ! Vous maîtrisez le Green Coding",
        Grade::B => "Très bien ! Quelques notions à approfondir",
        Grade::C => "Pas mal ! Continuez à apprendre",
        Grade::D | Grade::E => "À améliorer ! Relisez les conseils",
    }
}
