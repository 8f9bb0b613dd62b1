//! View state owned by the page and its sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! `theme` is the only state shared across sections and is injected through
//! Leptos context. `nav`, `modal` and `contact` are each owned by one section.

pub mod contact;
pub mod modal;
pub mod nav;
pub mod theme;
