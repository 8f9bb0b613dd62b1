//! Contact section: social links and the message form.
//!
//! Owns one `ContactFormSession`. A submit hands its ticket to the
//! submitter on a local task and settles the session when it resolves; if
//! the section is gone by then the settle is dropped.

use leptos::prelude::*;

use super::reveal::{Reveal, RevealTrigger};
use super::section::Section;
use crate::config::SiteConfig;
use crate::content::SOCIAL_LINKS;
use crate::state::contact::{ContactField, ContactFormSession, SubmitOutcome, SubmitRejection};
use crate::state::nav::SectionId;
use crate::util::variants;

#[component]
pub fn Contact() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let duration = config.reveal.item_duration_ms;
    let stagger = config.reveal.stagger();
    let item = move || variants::fade_up(duration);

    view! {
        <Section section=SectionId::Contact class="contact">
            <div class="container">
                <Reveal variants=item() class="section-header">
                    <h2 class="section-title">"Get In Touch"</h2>
                    <p class="section-subtitle">
                        "I'm always interested in hearing about new projects and opportunities. Feel free to \
                         reach out!"
                    </p>
                </Reveal>

                <div class="contact__grid">
                    <Reveal variants=variants::container(duration, stagger)>
                        <Reveal variants=item()>
                            <h3 class="contact__heading">"Connect With Me"</h3>
                        </Reveal>
                        <Reveal variants=variants::container(duration, stagger) class="contact__socials">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <Reveal variants=item()>
                                            <a
                                                class="social-card"
                                                href=link.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                            >
                                                <div class=format!("social-card__icon {}", link.accent)>{link.icon}</div>
                                                <h4 class="social-card__label">{link.label}</h4>
                                                <p class="social-card__hint">"Get in touch"</p>
                                            </a>
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </Reveal>
                        <Reveal variants=item() class="contact__note">
                            <h4>"Quick Response"</h4>
                            <p>"I typically respond to emails within 24 hours. Let's discuss your project!"</p>
                        </Reveal>
                    </Reveal>

                    <Reveal
                        variants=variants::slide_in(20.0, duration).with_visible_delay(200)
                        trigger=RevealTrigger::InView
                    >
                        <h3 class="contact__heading">"Send Me a Message"</h3>
                        <ContactForm settle_delay_ms=config.contact.settle_delay_ms/>
                    </Reveal>
                </div>
            </div>
        </Section>
    }
}

#[component]
fn ContactForm(settle_delay_ms: u32) -> impl IntoView {
    let session = RwSignal::new(ContactFormSession::new());
    let rejection = RwSignal::new(None::<SubmitRejection>);

    let field_value = move |field: ContactField| session.with(|s| s.field(field).to_owned());
    let on_field = move |field: ContactField, value: String| {
        rejection.set(None);
        session.update(|s| s.update_field(field, value));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(result) = session.try_update(ContactFormSession::submit) else {
            return;
        };
        match result {
            Ok(submission) => {
                rejection.set(None);
                spawn_submission(session, settle_delay_ms, submission);
            }
            Err(err) => {
                leptos::logging::warn!("contact form rejected: {err}");
                rejection.set(Some(err));
            }
        }
    };

    let sending = move || session.with(ContactFormSession::is_sending);

    view! {
        <form class="contact-form" on:submit=on_submit>
            <label class="contact-form__field">
                <span class="contact-form__label">"Name"</span>
                <input
                    type="text"
                    placeholder="Your name"
                    required
                    prop:value=move || field_value(ContactField::Name)
                    on:input=move |ev| on_field(ContactField::Name, event_target_value(&ev))
                />
            </label>
            <label class="contact-form__field">
                <span class="contact-form__label">"Email"</span>
                <input
                    type="email"
                    placeholder="your.email@example.com"
                    required
                    prop:value=move || field_value(ContactField::Email)
                    on:input=move |ev| on_field(ContactField::Email, event_target_value(&ev))
                />
            </label>
            <label class="contact-form__field">
                <span class="contact-form__label">"Message"</span>
                <textarea
                    rows="5"
                    placeholder="Tell me about your project..."
                    required
                    prop:value=move || field_value(ContactField::Message)
                    on:input=move |ev| on_field(ContactField::Message, event_target_value(&ev))
                ></textarea>
            </label>

            <button type="submit" class="btn btn--primary btn--block" disabled=sending>
                <Show when=sending>
                    <span class="spinner"></span>
                </Show>
                {move || session.with(ContactFormSession::submit_label)}
            </button>

            {move || rejection.get().map(|err| view! { <div class="banner banner--warn">{err.to_string()}</div> })}
            {move || {
                session
                    .with(|s| s.last_outcome().map(|outcome| (outcome, s.last_error().map(ToString::to_string))))
                    .map(|(outcome, error)| match outcome {
                        SubmitOutcome::Sent => {
                            view! {
                                <div class="banner banner--success">
                                    "✓ Message sent successfully! I'll get back to you soon."
                                </div>
                            }
                                .into_any()
                        }
                        SubmitOutcome::Failed => {
                            view! {
                                <div class="banner banner--error">
                                    {error.unwrap_or_else(|| "Message could not be sent.".to_owned())}
                                </div>
                            }
                                .into_any()
                        }
                    })
            }}
        </form>
    }
}

#[cfg(feature = "csr")]
fn spawn_submission(
    session: RwSignal<ContactFormSession>,
    settle_delay_ms: u32,
    submission: crate::state::contact::Submission,
) {
    use crate::net::submit::{ContactSubmitter, SimulatedSubmitter};
    use crate::util::timer::PlatformScheduler;

    let submitter = SimulatedSubmitter::new(settle_delay_ms, PlatformScheduler::default());
    leptos::task::spawn_local(async move {
        let result = submitter.submit(submission.form).await;
        if session.try_update(|s| s.settle(submission.id, result) && s.finish()).is_none() {
            log::debug!("contact form unmounted before submission settled");
        }
    });
}

#[cfg(not(feature = "csr"))]
fn spawn_submission(
    session: RwSignal<ContactFormSession>,
    settle_delay_ms: u32,
    submission: crate::state::contact::Submission,
) {
    // No task executor without a browser; the session stays sending.
    let _ = (session, settle_delay_ms);
    log::debug!("submission {:?} not delivered without a browser", submission.id);
}
