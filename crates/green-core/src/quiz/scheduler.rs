//! Owned, cancellable auto-advance for the quiz.
//!
//! After an answer is accepted the scheduler spawns one delayed task that
//! advances the engine. The task handle is owned here: `reset()` and `Drop`
//! abort it, and the task re-checks the session epoch under the lock before
//! mutating, so a continuation that already woke up cannot touch a session
//! that was reset in the meantime.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;

use crate::errors::CoreError;

use super::engine::{Advance, QuizEngine, QuizSession, QuizState, Selection};

/// Default pause between showing feedback and moving on.
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(1500);

/// Notification emitted when the delayed transition fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    Advanced(Advance),
}

pub struct QuizScheduler {
    engine: Arc<Mutex<QuizEngine>>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
    events: mpsc::UnboundedSender<QuizEvent>,
}

impl QuizScheduler {
    /// Wrap `engine`; returns the scheduler and the receiver for
    /// [`QuizEvent`]s.
    #[must_use]
    pub fn new(
        engine: QuizEngine,
        delay: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<QuizEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let scheduler = Self {
            engine: Arc::new(Mutex::new(engine)),
            delay,
            pending: None,
            events,
        };
        (scheduler, receiver)
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Shared handle to the engine, for rendering.
    #[must_use]
    pub fn engine(&self) -> Arc<Mutex<QuizEngine>> {
        Arc::clone(&self.engine)
    }

    /// Current state and a copy of the session.
    pub async fn snapshot(&self) -> (QuizState, QuizSession) {
        let engine = self.engine.lock().await;
        (engine.state(), engine.session().clone())
    }

    /// Whether an auto-advance is scheduled and has not fired yet.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Forward an answer to the engine and, if accepted, schedule the
    /// delayed advance.
    ///
    /// # Errors
    ///
    /// Propagates [`CoreError::AnswerOutOfRange`] from the engine.
    pub async fn select_answer(&mut self, index: usize) -> Result<Selection, CoreError> {
        let (selection, epoch) = {
            let mut engine = self.engine.lock().await;
            let selection = engine.select_answer(index)?;
            (selection, engine.epoch())
        };
        if matches!(selection, Selection::Accepted { .. }) {
            self.schedule(epoch);
        }
        Ok(selection)
    }

    /// Cancel any pending advance and restart the quiz.
    pub async fn reset(&mut self) {
        self.cancel();
        self.engine.lock().await.reset();
    }

    /// Abort the pending advance, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
            tracing::debug!("pending quiz advance cancelled");
        }
    }

    fn schedule(&mut self, epoch: u64) {
        self.cancel();
        let engine = Arc::clone(&self.engine);
        let events = self.events.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let outcome = engine.lock().await.advance_from(epoch);
            if outcome != Advance::Ignored {
                // Receiver gone means the view was torn down; nothing to notify.
                let _ = events.send(QuizEvent::Advanced(outcome));
            }
        }));
    }
}

impl Drop for QuizScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
