//! Skills grid and the "also proficient in" strip.

use leptos::prelude::*;

use super::reveal::Reveal;
use super::section::Section;
use crate::config::SiteConfig;
use crate::content::{EXTRA_SKILLS, SKILLS};
use crate::state::nav::SectionId;
use crate::util::variants;

#[component]
pub fn Skills() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let duration = config.reveal.item_duration_ms;

    view! {
        <Section section=SectionId::Skills class="skills">
            <div class="container">
                <Reveal variants=variants::fade_up(duration) class="section-header">
                    <h2 class="section-title">"Skills & Technologies"</h2>
                    <p class="section-subtitle">
                        "A comprehensive toolkit of technologies and frameworks I use to build exceptional iOS \
                         applications."
                    </p>
                </Reveal>

                <Reveal variants=variants::container(duration, config.reveal.stagger()) class="skills__grid">
                    {SKILLS
                        .iter()
                        .map(|skill| {
                            view! {
                                <Reveal variants=variants::fade_up(duration) class="skill-card">
                                    <div class=format!("skill-card__glow {}", skill.accent)></div>
                                    <div class=format!("skill-card__icon {}", skill.accent)>{skill.icon}</div>
                                    <h3 class="skill-card__name">{skill.name}</h3>
                                    <p class="skill-card__description">{skill.description}</p>
                                    <div class=format!("skill-card__underline {}", skill.accent)></div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </Reveal>

                <Reveal variants=variants::fade_up(duration).with_visible_delay(300) class="skills__extra">
                    <h3 class="skills__extra-title">"Also Proficient In"</h3>
                    <div class="skills__extra-grid">
                        {EXTRA_SKILLS
                            .iter()
                            .map(|name| view! { <div class="skills__chip">{*name}</div> })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </Section>
    }
}
