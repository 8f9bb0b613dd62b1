//! Outbound collaborators.
//!
//! SYSTEM CONTEXT
//! ==============
//! `submit` delivers the contact form. There is no other network traffic.

pub mod submit;
