use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::{LocalPool, block_on};
use futures::task::LocalSpawnExt;

use super::*;
use crate::state::contact::{ContactField, ContactFormSession, SubmitOutcome, SubmitRejection, SubmitStatus};
use crate::util::timer::ManualScheduler;

struct Offline;

impl ContactSubmitter for Offline {
    async fn submit(&self, _form: ContactForm) -> Result<(), SubmitError> {
        Err(SubmitError::Transport("offline".into()))
    }
}

/// Never runs what it is given, so every sleep is cancelled.
struct Stalled;

impl Scheduler for Stalled {
    fn now_ms(&self) -> f64 {
        0.0
    }

    fn after(&self, _delay_ms: u32, _callback: Box<dyn FnOnce()>) {}
}

fn filled_session() -> ContactFormSession {
    let mut session = ContactFormSession::new();
    session.update_field(ContactField::Name, "A");
    session.update_field(ContactField::Email, "b@c.com");
    session.update_field(ContactField::Message, "hi");
    session
}

// =============================================================
// SimulatedSubmitter
// =============================================================

#[test]
fn default_delay_is_three_seconds() {
    assert_eq!(SimulatedSubmitter::<ManualScheduler>::default().delay_ms, 3000);
}

#[test]
fn dropped_timer_surfaces_as_transport_error() {
    let result = block_on(SimulatedSubmitter::new(3000, Stalled).submit(ContactForm::default()));
    assert_eq!(result, Err(SubmitError::Transport("delivery timer dropped".into())));
}

#[test]
fn session_stays_sending_until_the_settle_delay_elapses() {
    let scheduler = ManualScheduler::new();
    let submitter = SimulatedSubmitter::new(3000, scheduler.clone());
    let session = Rc::new(RefCell::new(filled_session()));
    let submission = session.borrow_mut().submit().expect("valid form");

    let mut pool = LocalPool::new();
    let settling = Rc::clone(&session);
    pool.spawner()
        .spawn_local(async move {
            let result = submitter.submit(submission.form).await;
            let mut session = settling.borrow_mut();
            session.settle(submission.id, result);
            session.finish();
        })
        .expect("spawn on local pool");
    pool.run_until_stalled();

    scheduler.advance(2999.0);
    pool.run_until_stalled();
    assert_eq!(session.borrow().status(), SubmitStatus::Sending);
    assert_eq!(session.borrow_mut().submit(), Err(SubmitRejection::InFlight));
    assert_eq!(session.borrow().field(ContactField::Message), "hi");

    scheduler.advance(1.0);
    pool.run_until_stalled();
    let session = session.borrow();
    assert_eq!(session.status(), SubmitStatus::Idle);
    assert_eq!(session.last_outcome(), Some(SubmitOutcome::Sent));
    for field in ContactField::ALL {
        assert_eq!(session.field(field), "", "{field} cleared");
    }
}

#[test]
fn failure_surfaces_as_failed_outcome() {
    let mut session = filled_session();
    let submission = session.submit().expect("valid form");

    let result = block_on(Offline.submit(submission.form));
    session.settle(submission.id, result);
    session.finish();

    assert_eq!(session.last_outcome(), Some(SubmitOutcome::Failed));
    assert_eq!(session.last_error().map(ToString::to_string).as_deref(), Some("submission transport failed: offline"));
    assert_eq!(session.field(ContactField::Email), "b@c.com");
}
