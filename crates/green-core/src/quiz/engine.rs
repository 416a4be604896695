//! Quiz state machine.
//!
//! ```text
//! awaiting_answer ──select──▶ showing_feedback ──advance──▶ awaiting_answer (next question)
//!                                              └─advance──▶ complete (last question)
//! any state ──reset──▶ awaiting_answer (question 0, score 0)
//! ```
//!
//! The engine itself is synchronous; the delayed `advance` is driven by
//! [`QuizScheduler`](super::scheduler::QuizScheduler). Every `advance` and
//! `reset` bumps the session epoch so a continuation scheduled against an
//! older session can be recognised and dropped.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::classifier::{classify_quiz, quiz_message, quiz_percentage};
use crate::errors::CoreError;
use crate::grade::Grade;
use crate::views::QuizSummary;

use super::bank::{Question, QuestionBank};

// ---------------------------------------------------------------------------
// QuizState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QuizState {
    AwaitingAnswer,
    ShowingFeedback,
    Complete,
}

impl QuizState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AwaitingAnswer => "awaiting_answer",
            Self::ShowingFeedback => "showing_feedback",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for QuizState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// QuizSession
// ---------------------------------------------------------------------------

/// Mutable progress through one run of the quiz.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuizSession {
    pub current_question: usize,
    pub score: u32,
    pub selected_answer: Option<usize>,
    pub complete: bool,
}

/// Outcome of [`QuizEngine::select_answer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The answer was recorded; feedback is now showing.
    Accepted { correct: bool, correct_index: usize },
    /// Not awaiting an answer; nothing changed.
    Ignored,
}

/// Outcome of [`QuizEngine::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the question at this index.
    Next(usize),
    /// The last question was answered; the quiz is graded.
    Completed(Grade),
    /// Not showing feedback, or the continuation was stale.
    Ignored,
}

// ---------------------------------------------------------------------------
// QuizEngine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct QuizEngine {
    bank: QuestionBank,
    session: QuizSession,
    state: QuizState,
    epoch: u64,
}

impl QuizEngine {
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            session: QuizSession::default(),
            state: QuizState::AwaitingAnswer,
            epoch: 0,
        }
    }

    /// Engine over the built-in green-coding questions.
    #[must_use]
    pub fn green_coding() -> Self {
        Self::new(QuestionBank::green_coding())
    }

    #[must_use]
    pub const fn state(&self) -> QuizState {
        self.state
    }

    #[must_use]
    pub const fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.bank.len()
    }

    /// The question currently on screen, `None` once complete.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.session.complete {
            return None;
        }
        self.bank.get(self.session.current_question)
    }

    /// Final grade, available once the quiz is complete.
    #[must_use]
    pub fn grade(&self) -> Option<Grade> {
        self.session
            .complete
            .then(|| classify_quiz(self.session.score, self.total_u32()))
    }

    /// End-of-quiz summary, available once the quiz is complete.
    #[must_use]
    pub fn summary(&self) -> Option<QuizSummary> {
        let grade = self.grade()?;
        let total = self.total_u32();
        Some(QuizSummary {
            score: self.session.score,
            total,
            percentage: quiz_percentage(self.session.score, total),
            grade,
            message: quiz_message(grade).to_string(),
        })
    }

    /// Record an answer for the current question.
    ///
    /// Only valid while awaiting an answer; in any other state this is a
    /// no-op returning [`Selection::Ignored`].
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::AnswerOutOfRange`] if `index` is not an answer of
    /// the current question. The session is left unchanged.
    pub fn select_answer(&mut self, index: usize) -> Result<Selection, CoreError> {
        if self.state != QuizState::AwaitingAnswer {
            tracing::debug!(state = %self.state, index, "answer ignored");
            return Ok(Selection::Ignored);
        }
        let Some(question) = self.bank.get(self.session.current_question) else {
            return Ok(Selection::Ignored);
        };
        let answer = question
            .answers
            .get(index)
            .ok_or(CoreError::AnswerOutOfRange {
                index,
                available: question.answers.len(),
            })?;

        let correct = answer.is_correct;
        let correct_index = question.correct_index().unwrap_or(index);
        self.session.selected_answer = Some(index);
        if correct {
            self.session.score += 1;
        }
        self.state = QuizState::ShowingFeedback;
        tracing::debug!(
            question = self.session.current_question,
            index,
            correct,
            score = self.session.score,
            "answer recorded"
        );
        Ok(Selection::Accepted {
            correct,
            correct_index,
        })
    }

    /// Leave the feedback state: next question, or completion on the last.
    pub fn advance(&mut self) -> Advance {
        if self.state != QuizState::ShowingFeedback {
            return Advance::Ignored;
        }
        self.epoch += 1;

        let next = self.session.current_question + 1;
        if next < self.bank.len() {
            self.session.current_question = next;
            self.session.selected_answer = None;
            self.state = QuizState::AwaitingAnswer;
            return Advance::Next(next);
        }

        self.session.complete = true;
        self.state = QuizState::Complete;
        let grade = classify_quiz(self.session.score, self.total_u32());
        tracing::info!(score = self.session.score, %grade, "quiz complete");
        Advance::Completed(grade)
    }

    /// [`advance`](Self::advance), but only if no reset or advance happened
    /// since `epoch` was observed.
    pub fn advance_from(&mut self, epoch: u64) -> Advance {
        if epoch != self.epoch {
            tracing::debug!(
                scheduled = epoch,
                current = self.epoch,
                "dropping stale quiz continuation"
            );
            return Advance::Ignored;
        }
        self.advance()
    }

    /// Back to the first question with a zero score, from any state.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.session = QuizSession::default();
        self.state = QuizState::AwaitingAnswer;
    }

    fn total_u32(&self) -> u32 {
        u32::try_from(self.bank.len()).unwrap_or(u32::MAX)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
