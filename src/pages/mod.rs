//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The site is a single page; sections are reached by in-page anchors only.

pub mod home;
