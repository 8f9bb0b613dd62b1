//! Project lightbox.
//!
//! Rendered as a fixed overlay so opening it never moves the page scroll.
//! Body clicks stop propagation before they reach the backdrop handler. The
//! body only re-mounts when the selected id changes.

use leptos::prelude::*;

use crate::content;
use crate::state::modal::{ClickOrigin, CloseReason, ModalController};

#[component]
pub fn ProjectModal(modal: RwSignal<ModalController>) -> impl IntoView {
    let selected_id = Memo::new(move |_| modal.with(ModalController::selected_id));
    let close = move |reason: CloseReason| {
        modal.maybe_update(|m| m.close(reason).changed());
    };

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if modal.with_untracked(ModalController::is_open) && ev.key() == "Escape" {
                ev.prevent_default();
                modal.maybe_update(|m| m.handle_key(&ev.key()).changed());
            }
        });
        on_cleanup(move || handle.remove());
    }

    move || {
        let project = selected_id.get().and_then(content::project)?;
        Some(view! {
            <div
                class="project-modal__backdrop"
                on:click=move |_| {
                    modal.maybe_update(|m| m.handle_click(ClickOrigin::Backdrop).changed());
                }
            >
                <div
                    class="project-modal"
                    role="dialog"
                    aria-modal="true"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        modal.maybe_update(|m| m.handle_click(ClickOrigin::Body).changed());
                    }
                >
                    <div class="project-modal__header">
                        <button
                            class="project-modal__close"
                            aria-label="Close"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                close(CloseReason::CloseButton);
                            }
                        >
                            "✕"
                        </button>
                    </div>
                    <div class="project-modal__content">
                        <div class="project-modal__image">{project.image}</div>
                        <h2 class="project-modal__title">{project.title}</h2>
                        <p class="project-modal__description">{project.long_description}</p>
                        <h3 class="project-modal__label">"Technologies"</h3>
                        <div class="tag-list">
                            {project
                                .tags
                                .iter()
                                .map(|tag| view! { <span class="tag tag--primary">{*tag}</span> })
                                .collect_view()}
                        </div>
                        <div class="project-modal__actions">
                            {project
                                .link
                                .map(|href| {
                                    view! {
                                        <a class="btn btn--primary" href=href target="_blank" rel="noopener">
                                            "View Project"
                                        </a>
                                    }
                                })}
                            <button class="btn btn--outline">"Source Code"</button>
                        </div>
                    </div>
                </div>
            </div>
        })
    }
}
