//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The site is a single page; `home` composes every section in document
//! order and owns the navigation state they register with.

pub mod home;
