//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate redirects
//! and identity-dependent rendering; written only by the auth flow so every
//! reader observes the same transitions.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::{Role, User};
use crate::util::nav;
use crate::util::token_storage::{self, TokenPair};

/// Session state tracking the current user and sign-in status.
///
/// `authenticated` is true exactly when `user` is present and the last
/// token issuance succeeded; a failed refresh forces both back to their
/// signed-out values together. `loading` is true while the startup restore
/// is still deciding, and guards hold off until it clears.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub authenticated: bool,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        // A fresh session is undecided until the startup restore settles.
        Self { user: None, authenticated: false, loading: true }
    }
}

impl SessionState {
    /// Whether the current user holds `role`. False with no user.
    pub fn has_role(&self, role: Role) -> bool {
        self.user.as_ref().is_some_and(|user| user.role == role)
    }
}

/// Copyable handle over the reactive session state.
///
/// Provided once via context at the app root. Sign-in and sign-out write
/// through to token storage so a reload can restore the session.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self { state: RwSignal::new(SessionState::default()) }
    }

    /// Sign the session in: persist the token pair and publish the user.
    pub fn establish(&self, user: User, tokens: &TokenPair) {
        token_storage::save_tokens(tokens);
        self.state.update(|state| {
            state.user = Some(user);
            state.authenticated = true;
            state.loading = false;
        });
    }

    /// Sign the session out: drop stored tokens, reset the state, and send
    /// the browser back to the login view.
    pub fn clear(&self) {
        token_storage::clear_tokens();
        self.state.update(|state| {
            state.user = None;
            state.authenticated = false;
            state.loading = false;
        });
        nav::redirect_to(nav::LOGIN_ROUTE);
    }

    /// Mark the startup restore finished without signing in.
    pub fn finish_loading(&self) {
        self.state.update(|state| state.loading = false);
    }

    /// Tracked read for components and effects.
    pub fn with<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        self.state.with(f)
    }

    /// Untracked copy of the current state, for flow code and tests.
    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    /// Untracked role check usable outside the reactive graph.
    pub fn has_role(&self, role: Role) -> bool {
        self.state.with_untracked(|state| state.has_role(role))
    }

    /// Untracked sign-in check usable outside the reactive graph.
    pub fn is_authenticated(&self) -> bool {
        self.state.with_untracked(|state| state.authenticated)
    }
}
