//! Smooth-scroll primitive. Fire-and-forget; completion is never observed.

use crate::state::nav::ScrollRequest;

/// Scroll the viewport so the requested section's top edge is at the top.
/// A section missing from the DOM is skipped.
pub fn perform(request: ScrollRequest) {
    #[cfg(feature = "csr")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(request.section.as_str()))
        else {
            leptos::logging::warn!("scroll target #{} not in document", request.section.as_str());
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
    }
}
