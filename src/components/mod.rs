//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render identity-aware chrome while reading shared state from
//! Leptos context providers.

pub mod user_menu;
