use super::*;
use crate::util::storage::MemoryStorage;

// =============================================================
// Helpers
// =============================================================

fn patient(complete: bool) -> User {
    User {
        id: Some("u1".to_owned()),
        email: Some("asha@example.com".to_owned()),
        role: Role::Patient,
        is_profile_complete: complete,
        ..User::default()
    }
}

fn seeded(token: &str, user: &str) -> MemoryStorage {
    let store = MemoryStorage::new();
    store.insert(TOKEN_KEY, token);
    store.insert(USER_KEY, user);
    store
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn auth_state_default_is_signed_out_and_settled() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn pending_state_reports_loading_session() {
    let session = AuthState::pending().session();
    assert!(session.loading);
    assert!(!session.is_authenticated);
}

// =============================================================
// Restore
// =============================================================

#[test]
fn restore_with_valid_data_is_authenticated() {
    let store = seeded("tok", r#"{"email":"asha@example.com","role":"PATIENT","isProfileComplete":true}"#);
    let state = AuthState::restore(&store);
    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(state.role(), Role::Patient);
    assert!(state.is_profile_complete());
    assert_eq!(state.token.as_deref(), Some("tok"));
}

#[test]
fn restore_with_missing_keys_is_signed_out() {
    let store = MemoryStorage::new();
    store.insert(TOKEN_KEY, "tok");
    let state = AuthState::restore(&store);
    assert!(!state.is_authenticated());
    assert!(!state.loading);
    assert!(store.contains(TOKEN_KEY));
}

#[test]
fn restore_with_empty_token_is_signed_out() {
    let store = seeded("", r#"{"role":"PATIENT"}"#);
    assert!(!AuthState::restore(&store).is_authenticated());
}

#[test]
fn restore_with_malformed_user_clears_both_keys() {
    let store = seeded("tok", "{not json");
    let state = AuthState::restore(&store);
    assert!(!state.is_authenticated());
    assert!(!state.loading);
    assert!(store.is_empty());
}

#[test]
fn restore_with_unknown_role_fails_toward_role_selection() {
    let store = seeded("tok", r#"{"role":"SUPERUSER"}"#);
    let state = AuthState::restore(&store);
    assert!(state.is_authenticated());
    assert_eq!(state.role(), Role::None);
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn login_sets_state_and_persists_both_keys() {
    let store = MemoryStorage::new();
    let mut state = AuthState::pending();
    state.login(&store, "tok".to_owned(), patient(false)).unwrap();

    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("tok"));

    let restored = AuthState::restore(&store);
    assert_eq!(restored.user, state.user);
}

#[test]
fn login_with_failing_storage_still_signs_in_memory() {
    let store = MemoryStorage::read_only();
    let mut state = AuthState::default();
    let err = state.login(&store, "tok".to_owned(), patient(true)).unwrap_err();

    assert!(matches!(err, SessionError::Persist(StorageError::WriteRejected(_))));
    assert!(err.to_string().starts_with("failed to save authentication data"));
    assert!(state.is_authenticated());
    assert!(store.is_empty());
}

#[test]
fn logout_clears_state_and_storage() {
    let store = MemoryStorage::new();
    let mut state = AuthState::default();
    state.login(&store, "tok".to_owned(), patient(true)).unwrap();
    state.logout(&store);

    assert!(!state.is_authenticated());
    assert_eq!(state.role(), Role::None);
    assert!(store.is_empty());
}

#[test]
fn update_user_merges_and_persists() {
    let store = MemoryStorage::new();
    let mut state = AuthState::default();
    state.login(&store, "tok".to_owned(), patient(false)).unwrap();

    state
        .update_user(&store, UserUpdate { is_profile_complete: Some(true), ..UserUpdate::default() })
        .unwrap();

    assert!(state.is_profile_complete());
    assert!(AuthState::restore(&store).is_profile_complete());
}

#[test]
fn update_user_without_session_is_noop() {
    let store = MemoryStorage::new();
    let mut state = AuthState::default();
    state.update_user(&store, UserUpdate { role: Some(Role::Patient), ..UserUpdate::default() }).unwrap();
    assert!(state.user.is_none());
    assert!(store.is_empty());
}

// =============================================================
// Queries
// =============================================================

#[test]
fn has_role_never_matches_none() {
    let state = AuthState { user: Some(User::default()), token: Some("t".to_owned()), loading: false };
    assert!(!state.has_role(Role::None));
    assert!(!state.has_role(Role::Patient));
}

#[test]
fn session_snapshot_mirrors_state() {
    let state = AuthState { user: Some(patient(true)), token: Some("t".to_owned()), loading: false };
    assert_eq!(
        state.session(),
        Session { loading: false, is_authenticated: true, role: Role::Patient, is_profile_complete: true }
    );
    assert_eq!(state.email(), Some("asha@example.com"));
}
