//! Contact form session: three text fields plus a submission lifecycle.
//!
//! DESIGN
//! ======
//! Status only moves `Idle -> Sending -> Settled -> Idle`. `submit` hands
//! back a [`Submission`] ticket; the caller delivers it to a
//! `ContactSubmitter` and reports the result through `settle`, which records
//! the outcome and stops at `Settled`. `finish` then returns to `Idle`. A
//! settle for any ticket other than the one in flight is ignored, so a late
//! result can never clobber a newer session.
//!
//! After a success, `finish` clears all three fields as one reset. After a
//! failure the fields are kept so the visitor can retry.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

use crate::net::submit::SubmitError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field values as handed to the submission collaborator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// First field that is empty after trimming, in form order.
    #[must_use]
    pub fn first_missing(&self) -> Option<ContactField> {
        ContactField::ALL.into_iter().find(|field| self.get(*field).trim().is_empty())
    }

}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Settled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed,
}

/// Why `submit` refused to start a submission. No state changes on reject.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejection {
    #[error("{0} is required")]
    MissingField(ContactField),
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("a submission is already in flight")]
    InFlight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmissionId(u64);

/// Ticket for one in-flight submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub id: SubmissionId,
    pub form: ContactForm,
}

#[derive(Clone, Debug, Default)]
pub struct ContactFormSession {
    form: ContactForm,
    status: SubmitStatus,
    in_flight: Option<SubmissionId>,
    next_id: u64,
    last_outcome: Option<SubmitOutcome>,
    last_error: Option<SubmitError>,
}

impl ContactFormSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one field. Any banner from the previous submission goes away.
    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.set(field, value);
        self.last_outcome = None;
        self.last_error = None;
    }

    /// Start a submission. Returns the ticket to deliver to the collaborator.
    ///
    /// # Errors
    ///
    /// [`SubmitRejection::InFlight`] while another submission is outstanding,
    /// otherwise the first validation failure. The session is left untouched.
    pub fn submit(&mut self) -> Result<Submission, SubmitRejection> {
        if self.status != SubmitStatus::Idle {
            log::warn!("contact submit rejected: already {:?}", self.status);
            return Err(SubmitRejection::InFlight);
        }
        if let Some(field) = self.form.first_missing() {
            return Err(SubmitRejection::MissingField(field));
        }
        if !looks_like_email(&self.form.email) {
            return Err(SubmitRejection::InvalidEmail);
        }

        self.next_id += 1;
        let id = SubmissionId(self.next_id);
        self.in_flight = Some(id);
        self.status = SubmitStatus::Sending;
        self.last_outcome = None;
        self.last_error = None;
        log::debug!("contact submission {} sending", id.0);
        Ok(Submission { id, form: self.form.clone() })
    }

    /// Report the collaborator's result for `id` and move to `Settled`.
    /// Returns whether it applied.
    pub fn settle(&mut self, id: SubmissionId, result: Result<(), SubmitError>) -> bool {
        if self.in_flight != Some(id) {
            log::debug!("ignoring settle for stale submission {}", id.0);
            return false;
        }
        self.in_flight = None;
        self.status = SubmitStatus::Settled;

        match result {
            Ok(()) => {
                self.last_outcome = Some(SubmitOutcome::Sent);
                log::debug!("contact submission {} sent", id.0);
            }
            Err(err) => {
                log::warn!("contact submission {} failed: {err}", id.0);
                self.last_outcome = Some(SubmitOutcome::Failed);
                self.last_error = Some(err);
            }
        }
        true
    }

    /// Leave `Settled` for `Idle`, resetting the form if it was sent.
    /// Returns false outside `Settled`.
    pub fn finish(&mut self) -> bool {
        if self.status != SubmitStatus::Settled {
            return false;
        }
        if self.last_outcome == Some(SubmitOutcome::Sent) {
            self.form = ContactForm::default();
        }
        self.status = SubmitStatus::Idle;
        true
    }

    #[must_use]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    #[must_use]
    pub fn field(&self, field: ContactField) -> &str {
        self.form.get(field)
    }

    #[must_use]
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    #[must_use]
    pub fn last_outcome(&self) -> Option<SubmitOutcome> {
        self.last_outcome
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&SubmitError> {
        self.last_error.as_ref()
    }

    /// Label for the submit button.
    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.is_sending() { "Sending..." } else { "Send Message" }
    }
}

/// One `@` with a non-empty local part and a dotted domain.
fn looks_like_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.trim().split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}
