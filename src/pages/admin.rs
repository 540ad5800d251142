//! Admin-only page behind the role guard.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::user_menu::UserMenu;
use crate::net::types::Role;
use crate::state::session::Session;
use crate::util::guard::install_role_guard;

/// Admin page — only the `admin` role may enter.
#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    install_role_guard(session, vec![Role::Admin], navigate);

    view! {
        <div class="admin-page">
            <header class="admin-header">
                <h1>"Administration"</h1>
                <UserMenu/>
            </header>
            <p class="admin-intro">"Restricted area for account and access management."</p>
            <a href="/" class="admin-back">"Back to overview"</a>
        </div>
    }
}
