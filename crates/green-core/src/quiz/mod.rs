//! Green-coding knowledge quiz: question bank, state machine, and the
//! delayed auto-advance.

mod bank;
mod engine;
pub mod scheduler;

pub use bank::{Answer, Question, QuestionBank};
pub use engine::{Advance, QuizEngine, QuizSession, QuizState, Selection};
pub use scheduler::{DEFAULT_FEEDBACK_DELAY, QuizEvent, QuizScheduler};
