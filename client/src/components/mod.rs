//! Section components and the reveal wrapper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state (theme, navigation, config, reveal driver)
//! from Leptos context and own everything else locally: `projects` owns the
//! modal, `contact` owns the form session.

pub mod about;
pub mod contact;
pub mod experience;
pub mod header;
pub mod hero;
pub mod project_modal;
pub mod projects;
pub mod reveal;
pub mod section;
pub mod skills;
