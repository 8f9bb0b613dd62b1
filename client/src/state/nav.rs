//! Section navigation and the mobile menu.
//!
//! DESIGN
//! ======
//! Navigation is best-effort: a request naming a section that is not
//! mounted is dropped without an error. The mobile menu is closed by every
//! navigation attempt, so it never stays open across one. The controller
//! only decides; `util::scroll` performs the animated scroll.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::collections::BTreeSet;

/// Page sections in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl SectionId {
    pub const ALL: [Self; 6] = [Self::Hero, Self::About, Self::Skills, Self::Projects, Self::Experience, Self::Contact];

    /// DOM id of the section element.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Contact => "contact",
        }
    }

    /// Parse a section id, with or without a leading `#`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let id = raw.trim().trim_start_matches('#');
        Self::ALL.into_iter().find(|section| section.as_str() == id)
    }
}

/// One entry in the header navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section: SectionId,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "About", section: SectionId::About },
    NavItem { label: "Skills", section: SectionId::Skills },
    NavItem { label: "Projects", section: SectionId::Projects },
    NavItem { label: "Experience", section: SectionId::Experience },
    NavItem { label: "Contact", section: SectionId::Contact },
];

/// Smooth scroll to the top edge of `section`. Fire-and-forget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollRequest {
    pub section: SectionId,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenuState {
    pub open: bool,
}

/// Menu state plus the set of sections currently mounted.
#[derive(Clone, Debug, Default)]
pub struct NavigationController {
    menu: NavMenuState,
    mounted: BTreeSet<SectionId>,
}

impl NavigationController {
    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu.open
    }

    /// Flip the mobile menu. Returns the new value.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu.open = !self.menu.open;
        self.menu.open
    }

    pub fn close_menu(&mut self) {
        self.menu.open = false;
    }

    pub fn mount_section(&mut self, section: SectionId) {
        self.mounted.insert(section);
    }

    pub fn unmount_section(&mut self, section: SectionId) {
        self.mounted.remove(&section);
    }

    #[must_use]
    pub fn is_mounted(&self, section: SectionId) -> bool {
        self.mounted.contains(&section)
    }

    /// Close the menu and resolve `target` to a scroll request.
    ///
    /// Returns `None` when `target` does not name a mounted section.
    pub fn navigate(&mut self, target: &str) -> Option<ScrollRequest> {
        self.close_menu();
        let Some(section) = SectionId::parse(target).filter(|section| self.is_mounted(*section)) else {
            log::warn!("navigation target {target:?} is not mounted; ignoring");
            return None;
        };
        log::debug!("navigating to #{}", section.as_str());
        Some(ScrollRequest { section })
    }
}
