//! Process-wide light/dark theme.
//!
//! DESIGN
//! ======
//! `ThemeController` is the single owner of the theme value and its only
//! mutator is `toggle`. Subscribers are notified synchronously, in
//! subscription order, before `toggle` returns, so no section can lag
//! behind another.
//!
//! `ThemeContext` is the injected handle components receive through Leptos
//! context. It subscribes a reactive signal (for icon/color selection) and
//! the `<html>` attribute writer. Nothing is persisted between sessions.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use leptos::prelude::*;
use serde::Deserialize;

/// Current color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeState {
    Light,
    #[default]
    Dark,
}

impl ThemeState {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Glyph for the toggle button: shows the theme a click switches to.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }

    /// CSS modifier used by theme-dependent accents.
    #[must_use]
    pub fn accent_class(self) -> &'static str {
        match self {
            Self::Light => "accent--light",
            Self::Dark => "accent--dark",
        }
    }
}

/// Handle returned by [`ThemeController::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub type ThemeListener = Box<dyn Fn(ThemeState) + Send + Sync>;

/// Owner of the theme value and its subscriber list.
pub struct ThemeController {
    theme: ThemeState,
    listeners: Vec<(SubscriptionId, ThemeListener)>,
    next_id: u64,
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("theme", &self.theme)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl ThemeController {
    #[must_use]
    pub fn new(initial: ThemeState) -> Self {
        Self { theme: initial, listeners: Vec::new(), next_id: 0 }
    }

    #[must_use]
    pub fn get(&self) -> ThemeState {
        self.theme
    }

    /// Add a listener. It is not called with the current value.
    pub fn subscribe(&mut self, listener: impl Fn(ThemeState) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Flip the theme and notify every listener before returning.
    pub fn toggle(&mut self) -> ThemeState {
        self.theme = self.theme.toggled();
        log::debug!("theme -> {}", self.theme.as_str());
        for (_, listener) in &self.listeners {
            listener(self.theme);
        }
        self.theme
    }
}

/// Theme handle shared through Leptos context.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    controller: StoredValue<ThemeController>,
    current: RwSignal<ThemeState>,
}

impl ThemeContext {
    /// Build the controller, wire its subscribers, and apply `initial` to the
    /// document.
    #[must_use]
    pub fn new(initial: ThemeState) -> Self {
        let current = RwSignal::new(initial);
        let mut controller = ThemeController::new(initial);
        controller.subscribe(move |theme| current.set(theme));
        controller.subscribe(crate::util::theme_dom::apply);
        crate::util::theme_dom::apply(initial);
        Self { controller: StoredValue::new(controller), current }
    }

    /// Reactive read.
    #[must_use]
    pub fn get(&self) -> ThemeState {
        self.current.get()
    }

    pub fn toggle(&self) {
        self.controller.update_value(|controller| {
            controller.toggle();
        });
    }
}
