//! Projects grid. Owns the section's `ModalController`.

use leptos::prelude::*;

use super::project_modal::ProjectModal;
use super::reveal::Reveal;
use super::section::Section;
use crate::config::SiteConfig;
use crate::content::{PROJECTS, Project};
use crate::state::modal::ModalController;
use crate::state::nav::SectionId;
use crate::util::variants;

#[component]
pub fn Projects() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let duration = config.reveal.item_duration_ms;
    let modal = RwSignal::new(ModalController::default());

    let open = move |project: Project| {
        // Only notify when the selection actually changes.
        modal.maybe_update(|m| m.select(Some(project)).changed());
    };

    view! {
        <Section section=SectionId::Projects class="projects">
            <div class="container">
                <Reveal variants=variants::fade_up(duration) class="section-header">
                    <h2 class="section-title">"Featured Projects"</h2>
                    <p class="section-subtitle">
                        "A selection of my most impactful projects that showcase my skills and passion for iOS \
                         development."
                    </p>
                </Reveal>

                <Reveal variants=variants::container(duration, config.reveal.stagger()) class="projects__grid">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            let project = *project;
                            view! {
                                <Reveal variants=variants::fade_up(duration) class="project-card">
                                    <div class="project-card__inner" on:click=move |_| open(project)>
                                        <div class="project-card__image">
                                            <span class="project-card__emoji">{project.image}</span>
                                            <div class="project-card__overlay">
                                                <span class="project-card__overlay-btn">"↗"</span>
                                            </div>
                                        </div>
                                        <div class="project-card__body">
                                            <h3 class="project-card__title">{project.title}</h3>
                                            <p class="project-card__description">{project.description}</p>
                                            <div class="tag-list">
                                                {project
                                                    .tags
                                                    .iter()
                                                    .map(|tag| view! { <span class="tag">{*tag}</span> })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </Reveal>
            </div>

            <ProjectModal modal=modal/>
        </Section>
    }
}
