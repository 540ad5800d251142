//! Utility helpers shared across auth flow and UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and flow
//! logic to improve reuse and testability.

pub mod guard;
pub mod nav;
pub mod token_storage;
