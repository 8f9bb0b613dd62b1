//! Page section wrapper that registers itself as a navigation target.

use leptos::prelude::*;

use crate::state::nav::{NavigationController, SectionId};
use crate::util::scroll;

/// `<section>` whose id is a navigation target for as long as it is mounted.
#[component]
pub fn Section(section: SectionId, #[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let nav = expect_context::<RwSignal<NavigationController>>();
    // Mount state is only read by event handlers; nothing re-renders on it.
    nav.update_untracked(|n| n.mount_section(section));
    on_cleanup(move || {
        let _ = nav.try_update_untracked(|n| n.unmount_section(section));
    });

    view! {
        <section id=section.as_str() class=class>
            {children()}
        </section>
    }
}

/// Resolve `target` through the navigation controller and start the scroll.
/// Closes the mobile menu even when the target is not mounted.
pub fn navigate(nav: RwSignal<NavigationController>, target: &str) {
    if let Some(request) = nav.try_update(|n| n.navigate(target)).flatten() {
        scroll::perform(request);
    }
}
