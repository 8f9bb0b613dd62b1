//! About section: profile badge plus a staggered bio and highlight grid.

use leptos::prelude::*;

use super::reveal::{Reveal, RevealTrigger};
use super::section::Section;
use crate::config::SiteConfig;
use crate::content::HIGHLIGHTS;
use crate::state::nav::SectionId;
use crate::util::variants;

#[component]
pub fn About() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let duration = config.reveal.item_duration_ms;
    let stagger = config.reveal.stagger();
    let item = move || variants::fade_up(duration);

    view! {
        <Section section=SectionId::About class="about">
            <div class="container">
                <Reveal variants=variants::fade_in(duration) class="about__grid">
                    <Reveal
                        variants=variants::scale_in(800)
                        trigger=RevealTrigger::InView
                        class="about__portrait"
                    >
                        <div class="about__portrait-ring"></div>
                        <div class="about__portrait-face">"📱"</div>
                    </Reveal>

                    <Reveal variants=variants::container(duration, stagger) trigger=RevealTrigger::InView>
                        <Reveal variants=item()>
                            <h2 class="section-title">"About Me"</h2>
                        </Reveal>
                        <Reveal variants=item() class="about__text">
                            "I'm a passionate iOS developer with over 8 years of experience building beautiful, \
                             performant, and user-centric applications. I specialize in modern Swift \
                             development, SwiftUI, and creating seamless user experiences that users love."
                        </Reveal>
                        <Reveal variants=item() class="about__text">
                            "My journey in iOS development has taken me through startups, scale-ups, and \
                             established tech companies. I'm committed to writing clean, maintainable code and \
                             staying at the forefront of iOS technology."
                        </Reveal>
                        <Reveal variants=variants::container(duration, stagger) class="about__highlights">
                            {HIGHLIGHTS
                                .iter()
                                .map(|highlight| {
                                    view! {
                                        <Reveal variants=item() class="about__highlight">
                                            <span class="about__check">"✓"</span>
                                            <span>{*highlight}</span>
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </Reveal>
                    </Reveal>
                </Reveal>
            </div>
        </Section>
    }
}
