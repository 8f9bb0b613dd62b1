//! Landing block. Every piece animates in on mount, each with its own delay.

use leptos::prelude::*;

use super::reveal::{Reveal, RevealTrigger};
use super::section::{Section, navigate};
use crate::state::nav::{NavigationController, SectionId};
use crate::util::variants;

const HERO_DURATION_MS: u32 = 800;

#[component]
pub fn Hero() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavigationController>>();
    let to_about = move |_| navigate(nav, SectionId::About.as_str());
    let to_contact = move |_| navigate(nav, SectionId::Contact.as_str());

    view! {
        <Section section=SectionId::Hero class="hero">
            <div class="hero__backdrop" aria-hidden="true">
                {(0..5)
                    .map(|i| {
                        let style = format!("left: {}%; top: {}%;", 20 + i * 15, 30 + i * 10);
                        view! { <div class="hero__particle" style=style></div> }
                    })
                    .collect_view()}
            </div>

            <div class="hero__content">
                <Reveal
                    variants=variants::fade_up(HERO_DURATION_MS).with_visible_delay(200)
                    trigger=RevealTrigger::Mount
                >
                    <h1 class="hero__title">
                        <span class="hero__title-line">"Crafting"</span>
                        <span class="hero__title-line hero__title-line--gradient">"Exceptional iOS Apps"</span>
                    </h1>
                </Reveal>

                <Reveal
                    variants=variants::fade_up(HERO_DURATION_MS).with_visible_delay(400)
                    trigger=RevealTrigger::Mount
                    class="hero__subtitle"
                >
                    "Senior iOS Developer with a passion for creating beautiful, performant, and user-centric \
                     applications. Specializing in Swift, SwiftUI, and modern iOS development."
                </Reveal>

                <Reveal
                    variants=variants::fade_up(HERO_DURATION_MS).with_visible_delay(600)
                    trigger=RevealTrigger::Mount
                    class="hero__actions"
                >
                    <button class="btn btn--primary" on:click=to_about>
                        "View My Work"
                    </button>
                    <button class="btn btn--outline" on:click=to_contact>
                        "Get In Touch"
                    </button>
                </Reveal>

                <button class="hero__scroll-indicator" aria-label="Scroll to about" on:click=to_about>
                    "⌄"
                </button>
            </div>
        </Section>
    }
}
