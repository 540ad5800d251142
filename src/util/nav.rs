//! Hard browser navigation for flow-level redirects.
//!
//! Flow code (logout, forced sign-out) runs outside the router's reactive
//! scope, so it redirects through `window.location` rather than a router
//! navigate handle. Guards installed inside components use the router.

/// Route presenting the login form.
pub const LOGIN_ROUTE: &str = "/login";
/// Route shown when a guard denies access.
pub const UNAUTHORIZED_ROUTE: &str = "/unauthorized";
/// Default landing route after sign-in.
pub const HOME_ROUTE: &str = "/";

/// Point the browser at `path`. No-op outside the browser build.
pub fn redirect_to(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(w) = web_sys::window() {
            let _ = w.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
