//! Reveal engine, timers, and browser primitives.
//!
//! SYSTEM CONTEXT
//! ==============
//! `variants`, `reveal`, `timer` and `reveal_driver` are pure and run natively
//! under test. `viewport`, `scroll` and `theme_dom` touch the DOM and are
//! no-ops (or absent) without the `csr` feature.

pub mod reveal;
pub mod reveal_driver;
pub mod scroll;
pub mod theme_dom;
pub mod timer;
pub mod variants;
#[cfg(feature = "csr")]
pub mod viewport;
