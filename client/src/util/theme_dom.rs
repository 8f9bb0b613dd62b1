//! Applies the active theme to the document root.
//!
//! Sets `data-theme` and toggles the `dark` class on `<html>`. Requires a
//! browser; native builds no-op. Theme preference is not persisted.

use crate::state::theme::ThemeState;

/// Reflect `theme` on the `<html>` element.
pub fn apply(theme: ThemeState) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", theme.as_str());
            let _ = el.class_list().toggle_with_force("dark", theme.is_dark());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}
