//! Dashboard page for signed-in users.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Any signed-in role may enter;
//! the role guard redirects everyone else once the session settles.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::user_menu::UserMenu;
use crate::net::types::Role;
use crate::state::session::Session;
use crate::util::guard::install_role_guard;

/// Dashboard page — greets the current user and links to role-gated areas.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    install_role_guard(session, vec![Role::Admin, Role::Manager, Role::User], navigate);

    let greeting = move || {
        session.with(|state| {
            state
                .user
                .as_ref()
                .map(|user| format!("Welcome back, {}", user.name))
                .unwrap_or_default()
        })
    };
    let is_admin = move || session.with(|state| state.has_role(Role::Admin));

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>"Overview"</h1>
                <UserMenu/>
            </header>
            <p class="dashboard-greeting">{greeting}</p>
            <nav class="dashboard-links">
                <Show when=is_admin>
                    <a href="/admin" class="dashboard-link">"Admin area"</a>
                </Show>
            </nav>
        </div>
    }
}
