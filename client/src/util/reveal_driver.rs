//! Executes [`RevealCommand`]s against a [`Scheduler`].
//!
//! SYSTEM CONTEXT
//! ==============
//! The orchestrator decides *what* should happen; the driver makes it happen:
//! `Show` runs the target's reveal callback (in the app, flipping a signal
//! that swaps the inline style), `Schedule` arms a timer that calls back into
//! the orchestrator. Zero-delay schedules run inline so unstaggered children
//! reveal in the same turn as their parent.
//!
//! Timer callbacks go back through [`RevealOrchestrator::fire`], which ignores
//! targets that were unmounted in the meantime.

#[cfg(test)]
#[path = "reveal_driver_test.rs"]
mod reveal_driver_test;

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use super::reveal::{RevealCommand, RevealError, RevealOrchestrator, RevealPhase, RevealPolicy, TargetId};
use super::timer::Scheduler;
use super::variants::AnimationVariantSet;

type RevealCallback = Rc<dyn Fn()>;

struct DriverState {
    orchestrator: RevealOrchestrator,
    callbacks: HashMap<TargetId, RevealCallback>,
}

/// Shared handle; clones drive the same orchestrator.
pub struct RevealDriver<S> {
    state: Rc<RefCell<DriverState>>,
    scheduler: S,
}

impl<S: Clone> Clone for RevealDriver<S> {
    fn clone(&self) -> Self {
        Self { state: Rc::clone(&self.state), scheduler: self.scheduler.clone() }
    }
}

impl<S: Scheduler + Clone + 'static> RevealDriver<S> {
    #[must_use]
    pub fn new(policy: RevealPolicy, scheduler: S) -> Self {
        let state = DriverState { orchestrator: RevealOrchestrator::new(policy), callbacks: HashMap::new() };
        Self { state: Rc::new(RefCell::new(state)), scheduler }
    }

    #[must_use]
    pub fn policy(&self) -> RevealPolicy {
        *self.state.borrow().orchestrator.policy()
    }

    /// Register a top-level subject. `on_reveal` runs once, when it is shown.
    pub fn register(&self, variants: AnimationVariantSet, on_reveal: impl Fn() + 'static) -> TargetId {
        let mut state = self.state.borrow_mut();
        let id = state.orchestrator.register(variants);
        state.callbacks.insert(id, Rc::new(on_reveal));
        id
    }

    /// Register a child of `parent` in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`RevealError::UnknownTarget`] if `parent` is gone.
    pub fn register_child(
        &self,
        parent: TargetId,
        variants: AnimationVariantSet,
        on_reveal: impl Fn() + 'static,
    ) -> Result<TargetId, RevealError> {
        let (id, commands) = {
            let mut state = self.state.borrow_mut();
            let (id, commands) = state.orchestrator.register_child(parent, variants)?;
            state.callbacks.insert(id, Rc::new(on_reveal));
            (id, commands)
        };
        self.apply(commands);
        Ok(id)
    }

    /// # Errors
    ///
    /// Propagates [`RevealOrchestrator::observe`] errors.
    pub fn observe(&self, target: TargetId) -> Result<(), RevealError> {
        let commands = self.state.borrow_mut().orchestrator.observe(target)?;
        self.apply(commands);
        Ok(())
    }

    /// Feed a viewport membership change for `target`.
    pub fn set_membership(&self, target: TargetId, in_viewport: bool) {
        let commands = self.state.borrow_mut().orchestrator.set_membership(target, in_viewport);
        self.apply(commands);
    }

    /// Observe and trigger in one step, for elements that animate on mount.
    ///
    /// # Errors
    ///
    /// Propagates [`RevealOrchestrator::observe`] errors.
    pub fn reveal_now(&self, target: TargetId) -> Result<(), RevealError> {
        self.observe(target)?;
        self.set_membership(target, true);
        Ok(())
    }

    /// Drop `target` and its descendants, including their callbacks.
    pub fn unmount(&self, target: TargetId) {
        let mut state = self.state.borrow_mut();
        let removed = state.orchestrator.unmount(target);
        let DriverState { orchestrator, callbacks } = &mut *state;
        callbacks.retain(|id, _| orchestrator.is_mounted(*id));
        log::debug!("unmounted {target} ({removed} targets)");
    }

    #[must_use]
    pub fn is_visible(&self, target: TargetId) -> bool {
        self.state.borrow().orchestrator.is_visible(target)
    }

    #[must_use]
    pub fn phase(&self, target: TargetId) -> Option<RevealPhase> {
        self.state.borrow().orchestrator.phase(target)
    }

    fn fire(&self, target: TargetId) {
        let commands = self.state.borrow_mut().orchestrator.fire(target);
        self.apply(commands);
    }

    fn apply(&self, commands: Vec<RevealCommand>) {
        let mut queue = VecDeque::from(commands);
        while let Some(command) = queue.pop_front() {
            match command {
                RevealCommand::Show(target) => {
                    let callback = self.state.borrow().callbacks.get(&target).cloned();
                    if let Some(callback) = callback {
                        callback();
                    }
                }
                RevealCommand::Schedule { target, delay_ms: 0 } => {
                    queue.extend(self.state.borrow_mut().orchestrator.fire(target));
                }
                RevealCommand::Schedule { target, delay_ms } => {
                    let driver = self.clone();
                    self.scheduler.after(delay_ms, Box::new(move || driver.fire(target)));
                }
            }
        }
    }
}
