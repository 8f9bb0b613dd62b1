//! Contact submission collaborator.
//!
//! The site has no backend endpoint for messages. `SimulatedSubmitter` waits
//! a fixed delay on a [`Scheduler`] and acknowledges, standing in for a real
//! delivery call behind the same `ContactSubmitter` seam.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::future::Future;

use crate::state::contact::ContactForm;
use crate::util::timer::{PlatformScheduler, Scheduler};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("submission transport failed: {0}")]
    Transport(String),
}

/// Accepts a filled-in form and resolves success or failure.
pub trait ContactSubmitter {
    fn submit(&self, form: ContactForm) -> impl Future<Output = Result<(), SubmitError>>;
}

/// Acknowledges every submission after `delay_ms`.
#[derive(Clone, Debug)]
pub struct SimulatedSubmitter<S = PlatformScheduler> {
    pub delay_ms: u32,
    scheduler: S,
}

impl<S: Scheduler> SimulatedSubmitter<S> {
    pub const DEFAULT_DELAY_MS: u32 = 3000;

    #[must_use]
    pub fn new(delay_ms: u32, scheduler: S) -> Self {
        Self { delay_ms, scheduler }
    }
}

impl<S: Scheduler + Default> Default for SimulatedSubmitter<S> {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY_MS, S::default())
    }
}

impl<S: Scheduler> ContactSubmitter for SimulatedSubmitter<S> {
    async fn submit(&self, form: ContactForm) -> Result<(), SubmitError> {
        log::debug!("simulating delivery of {} byte message from {}", form.message.len(), form.email);
        self.scheduler
            .sleep(self.delay_ms)
            .await
            .map_err(|_| SubmitError::Transport("delivery timer dropped".to_owned()))
    }
}
