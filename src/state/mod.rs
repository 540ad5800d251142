//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session is the only app-wide state; it lives behind a copyable
//! handle so flow code, guards, and components can all share one source
//! of truth through Leptos context.

pub mod session;
