//! The one-page portfolio.

use leptos::prelude::*;

use crate::components::{
    about::About, contact::Contact, experience::Experience, header::Header, hero::Hero, projects::Projects,
    skills::Skills,
};
use crate::state::nav::NavigationController;

#[component]
pub fn HomePage() -> impl IntoView {
    // Sections register themselves as they mount.
    provide_context(RwSignal::new(NavigationController::default()));

    view! {
        <div class="page">
            <Header/>
            <main>
                <Hero/>
                <About/>
                <Skills/>
                <Projects/>
                <Experience/>
                <Contact/>
            </main>
            <footer class="site-footer">
                <p>"Built with Rust and Leptos."</p>
            </footer>
        </div>
    }
}
