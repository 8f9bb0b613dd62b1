//! Timer primitive used by stagger delays and the contact settle delay.
//!
//! Callbacks are not cancellable. Everything scheduled through a
//! [`Scheduler`] must re-check its target when it fires and no-op if the
//! target is gone.
//!
//! `BrowserScheduler` wraps `gloo-timers` and only exists under `csr`.
//! `ManualScheduler` is a virtual clock: native builds use it in place of
//! real timers, and tests advance it explicitly.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use futures::channel::oneshot;

/// `after(delay, callback)` plus a monotonic clock.
pub trait Scheduler {
    /// Milliseconds on this scheduler's clock.
    fn now_ms(&self) -> f64;

    /// Run `callback` once, `delay_ms` from now, on the same thread.
    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>);

    /// Resolve once `delay_ms` has elapsed on this scheduler's clock.
    ///
    /// Resolves to `Err` if the scheduler drops the timer without running it.
    fn sleep(&self, delay_ms: u32) -> impl Future<Output = Result<(), oneshot::Canceled>> + 'static {
        let (tx, rx) = oneshot::channel();
        self.after(
            delay_ms,
            Box::new(move || {
                if tx.send(()).is_err() {
                    log::debug!("sleeper dropped before its timer fired");
                }
            }),
        );
        rx
    }
}

/// Scheduler backed by `setTimeout`.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "csr")]
impl Scheduler for BrowserScheduler {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }

    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        gloo_timers::callback::Timeout::new(delay_ms, callback).forget();
    }
}

/// Scheduler the app runs on for the current build target.
#[cfg(feature = "csr")]
pub type PlatformScheduler = BrowserScheduler;

/// Without a browser nothing advances the clock, so every timed reveal stays
/// pending.
#[cfg(not(feature = "csr"))]
pub type PlatformScheduler = ManualScheduler;

struct Pending {
    due_ms: f64,
    seq: u64,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ManualClock {
    now_ms: f64,
    seq: u64,
    queue: Vec<Pending>,
}

/// Deterministic scheduler driven by [`ManualScheduler::advance`].
///
/// Callbacks due at the same instant run in scheduling order.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let clock = self.clock.borrow();
        f.debug_struct("ManualScheduler")
            .field("now_ms", &clock.now_ms)
            .field("pending", &clock.queue.len())
            .finish()
    }
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks not yet run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.clock.borrow().queue.len()
    }

    /// Move the clock forward by `ms`, running every callback that comes due
    /// in order. Callbacks may schedule more work; anything due within the
    /// window also runs.
    pub fn advance(&self, ms: f64) {
        let target = self.clock.borrow().now_ms + ms;
        while let Some(callback) = self.pop_due(target) {
            callback();
        }
        self.clock.borrow_mut().now_ms = target;
    }

    fn pop_due(&self, until_ms: f64) -> Option<Box<dyn FnOnce()>> {
        let mut clock = self.clock.borrow_mut();
        let index = clock
            .queue
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= until_ms)
            .min_by(|(_, a), (_, b)| a.due_ms.total_cmp(&b.due_ms).then(a.seq.cmp(&b.seq)))
            .map(|(index, _)| index)?;
        let pending = clock.queue.swap_remove(index);
        clock.now_ms = pending.due_ms;
        Some(pending.callback)
    }
}

impl Scheduler for ManualScheduler {
    fn now_ms(&self) -> f64 {
        self.clock.borrow().now_ms
    }

    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        let mut clock = self.clock.borrow_mut();
        let due_ms = clock.now_ms + f64::from(delay_ms);
        let seq = clock.seq;
        clock.seq += 1;
        clock.queue.push(Pending { due_ms, seq, callback });
    }
}
