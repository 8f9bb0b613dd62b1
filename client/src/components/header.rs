//! Fixed header: logo, section navigation, theme toggle, mobile menu.

use leptos::prelude::*;

use super::reveal::{Reveal, RevealTrigger};
use super::section::navigate;
use crate::config::SiteConfig;
use crate::state::nav::{NAV_ITEMS, NavigationController};
use crate::state::theme::ThemeContext;

#[component]
pub fn Header() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();
    let entrance = expect_context::<SiteConfig>().reveal.header_entrance();
    let nav = expect_context::<RwSignal<NavigationController>>();
    let menu_open = move || nav.with(NavigationController::menu_open);

    let nav_buttons = move |item_class: &'static str| {
        NAV_ITEMS
            .iter()
            .map(|item| {
                let target = item.section.as_str();
                view! {
                    <button class=item_class on:click=move |_| navigate(nav, target)>
                        {item.label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header class="site-header">
            <Reveal variants=entrance trigger=RevealTrigger::Mount>
                <div class="site-header__bar">
                    <div class="site-header__logo">"iOS Dev"</div>

                    <nav class="site-header__nav">{nav_buttons("site-header__link")}</nav>

                    <div class="site-header__actions">
                        <button
                            class=move || format!("site-header__icon-btn {}", theme.get().accent_class())
                            aria-label="Toggle theme"
                            on:click=move |_| theme.toggle()
                        >
                            {move || theme.get().toggle_icon()}
                        </button>
                        <button
                            class="site-header__icon-btn site-header__menu-btn"
                            aria-label="Toggle menu"
                            aria-expanded=move || menu_open().to_string()
                            on:click=move |_| {
                                nav.update(|n| {
                                    n.toggle_menu();
                                });
                            }
                        >
                            {move || if menu_open() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>

                <Show when=menu_open>
                    <nav class="site-header__mobile-nav">{nav_buttons("site-header__mobile-link")}</nav>
                </Show>
            </Reveal>
        </header>
    }
}
