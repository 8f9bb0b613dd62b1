//! Experience timeline and summary stats.

use leptos::prelude::*;

use super::reveal::{Reveal, RevealTrigger};
use super::section::Section;
use crate::config::SiteConfig;
use crate::content::{EXPERIENCE, EXPERIENCE_STATS};
use crate::state::nav::SectionId;
use crate::util::variants::{self, StaggerSpec};

/// Timeline entries stagger at twice the usual interval.
const TIMELINE_STAGGER_MS: u32 = 200;
const ACHIEVEMENT_STEP_MS: u32 = 100;

#[component]
pub fn Experience() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let duration = config.reveal.item_duration_ms;
    let timeline = StaggerSpec::new(config.reveal.delay_children_ms, TIMELINE_STAGGER_MS);

    view! {
        <Section section=SectionId::Experience class="experience">
            <div class="container container--narrow">
                <Reveal variants=variants::fade_up(duration) class="section-header">
                    <h2 class="section-title">"Experience"</h2>
                    <p class="section-subtitle">
                        "My professional journey in iOS development, from junior developer to senior engineer."
                    </p>
                </Reveal>

                <Reveal variants=variants::container(duration, timeline) class="timeline">
                    <div class="timeline__line"></div>
                    {EXPERIENCE
                        .iter()
                        .map(|entry| {
                            view! {
                                <Reveal variants=variants::slide_in(-20.0, duration) class="timeline__item">
                                    <div class="timeline__dot">{entry.logo}</div>
                                    <div class="timeline__card">
                                        <div class="timeline__card-header">
                                            <div>
                                                <h3 class="timeline__position">{entry.position}</h3>
                                                <p class="timeline__company">{entry.company}</p>
                                            </div>
                                            <span class="timeline__period">{entry.period}</span>
                                        </div>
                                        <p class="timeline__description">{entry.description}</p>
                                        <h4 class="timeline__label">"Key Achievements"</h4>
                                        <ul class="timeline__achievements">
                                            {entry
                                                .achievements
                                                .iter()
                                                .zip(0_u32..)
                                                .map(|(achievement, i)| {
                                                    let variants = variants::slide_in(-10.0, duration)
                                                        .with_visible_delay(i * ACHIEVEMENT_STEP_MS);
                                                    view! {
                                                        <Reveal variants=variants trigger=RevealTrigger::InView>
                                                            <li class="timeline__achievement">
                                                                <span class="timeline__bullet"></span>
                                                                <span>{*achievement}</span>
                                                            </li>
                                                        </Reveal>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </Reveal>

                <Reveal variants=variants::fade_up(duration).with_visible_delay(400) class="experience__stats">
                    {EXPERIENCE_STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="experience__stat">
                                    <p class="experience__stat-value">{stat.value}</p>
                                    <p class="experience__stat-label">{stat.label}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </Reveal>
            </div>
        </Section>
    }
}
