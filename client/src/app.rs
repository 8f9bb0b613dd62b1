//! Root application component and shared context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::components::reveal::RevealContext;
use crate::config::SiteConfig;
use crate::pages::home::HomePage;
use crate::state::theme::ThemeContext;

/// Root application component.
///
/// Provides the site config, the theme and the page-wide reveal driver.
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_meta_context();

    provide_context(config);
    provide_context(ThemeContext::new(config.initial_theme));
    provide_context(RevealContext::new(config.reveal.policy()));

    view! {
        <Title text="iOS Developer Portfolio"/>
        <Meta name="description" content="Senior iOS developer portfolio: skills, projects and experience."/>
        <HomePage/>
    }
}
