//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::api::{ApiConfig, HttpAuthApi};
use crate::net::auth_client::AuthClient;
use crate::pages::admin::AdminPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::unauthorized::UnauthorizedPage;
use crate::state::session::Session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and auth-client contexts, kicks off the startup
/// session restore, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new();
    let client = AuthClient::new(HttpAuthApi::new(ApiConfig::default()), session);

    provide_context(session);
    provide_context(client.clone());

    // Re-establish a persisted session once per page load.
    #[cfg(feature = "hydrate")]
    {
        let restore_client = client.clone();
        leptos::task::spawn_local(async move {
            restore_client.restore().await;
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/anteroom.css"/>
        <Title text="Anteroom"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
