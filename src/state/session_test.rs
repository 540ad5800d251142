use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user(role: Role) -> User {
    User {
        id: "u-1".to_owned(),
        email: "alice@example.com".to_owned(),
        name: "Alice".to_owned(),
        role,
    }
}

fn make_pair() -> TokenPair {
    TokenPair { access: "at-1".to_owned(), refresh: "rt-1".to_owned() }
}

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn default_state_is_signed_out() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(!state.authenticated);
}

#[test]
fn default_state_is_loading_until_restore_settles() {
    let state = SessionState::default();
    assert!(state.loading);
}

// =============================================================
// Role checks
// =============================================================

#[test]
fn has_role_matches_only_the_current_role() {
    let mut state = SessionState::default();
    state.user = Some(make_user(Role::Admin));
    assert!(state.has_role(Role::Admin));
    assert!(!state.has_role(Role::User));
    assert!(!state.has_role(Role::Manager));
}

#[test]
fn has_role_is_false_with_no_user() {
    let state = SessionState::default();
    assert!(!state.has_role(Role::Admin));
}

// =============================================================
// Session transitions
// =============================================================

#[test]
fn establish_publishes_user_and_persists_tokens() {
    let session = Session::new();
    session.establish(make_user(Role::Admin), &make_pair());

    let state = session.snapshot();
    assert!(state.authenticated);
    assert!(!state.loading);
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u-1"));
    assert_eq!(token_storage::load_access_token().as_deref(), Some("at-1"));
    assert_eq!(token_storage::load_refresh_token().as_deref(), Some("rt-1"));
}

#[test]
fn clear_signs_out_and_drops_tokens() {
    let session = Session::new();
    session.establish(make_user(Role::User), &make_pair());
    session.clear();

    let state = session.snapshot();
    assert!(state.user.is_none());
    assert!(!state.authenticated);
    assert!(!state.loading);
    assert_eq!(token_storage::load_access_token(), None);
    assert_eq!(token_storage::load_refresh_token(), None);
}

#[test]
fn finish_loading_only_clears_the_loading_flag() {
    let session = Session::new();
    session.finish_loading();

    let state = session.snapshot();
    assert!(!state.loading);
    assert!(state.user.is_none());
    assert!(!state.authenticated);
}

#[test]
fn session_handle_checks_reflect_current_state() {
    let session = Session::new();
    assert!(!session.is_authenticated());
    assert!(!session.has_role(Role::Admin));

    session.establish(make_user(Role::Admin), &make_pair());
    assert!(session.is_authenticated());
    assert!(session.has_role(Role::Admin));
    assert!(!session.has_role(Role::User));
}
