//! Role-based route guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical access rules: wait for the
//! session to settle, let any allowed role through, and send everyone else
//! to `/unauthorized`.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::session::{Session, SessionState};
use crate::util::nav;

/// Whether the session may enter a route restricted to `allowed` roles.
///
/// Requires an authenticated session whose user holds at least one of the
/// allowed roles. An empty `allowed` set admits nobody.
pub fn role_allows(state: &SessionState, allowed: &[Role]) -> bool {
    state.authenticated && allowed.iter().any(|role| state.has_role(*role))
}

/// Whether the guard should redirect: the session has settled and access
/// is denied. While the startup restore is still loading, neither allow
/// nor deny.
pub fn should_redirect_denied(state: &SessionState, allowed: &[Role]) -> bool {
    !state.loading && !role_allows(state, allowed)
}

/// Redirect to `/unauthorized` whenever the session has settled without any
/// of the `allowed` roles.
pub fn install_role_guard<F>(session: Session, allowed: Vec<Role>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        let redirect = session.with(|state| should_redirect_denied(state, &allowed));
        if redirect {
            navigate(nav::UNAUTHORIZED_ROUTE, NavigateOptions::default());
        }
    });
}
