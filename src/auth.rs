//! Credential storage, bearer-token resolution, and the shared auth-failure
//! policy.
//!
//! Tokens live in whichever storage area the login flow happened to use, under
//! one of several well-known keys. Resolution checks the persistent store
//! first, then the session-scoped one, in a fixed key order. When any gateway
//! call comes back 401/403 the token guard clears every candidate key from
//! both stores, announces the change on the auth signal, and sends the
//! navigator to the login route.

use std::str::FromStr;
use tokio::sync::watch;
use tracing::{info, warn};

/// Candidate storage keys, checked in order. Login flows in the wild have
/// used all of these.
pub const TOKEN_KEYS: &[&str] = &[
    "authToken",
    "auth_token",
    "accessToken",
    "access_token",
    "token",
    "jwt",
    "bearerToken",
    "bearer_token",
];

/// Storage key for the persisted "quick edit mode" preference.
pub const QUICK_EDIT_KEY: &str = "quickEditMode";

// ============================================================================
// Storage and navigation seams
// ============================================================================

/// One browser storage area (persistent or session-scoped). Synchronous by
/// nature; implementations decide where the strings actually live.
pub trait CredentialStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Client-side route changes. The embedding shell supplies the real one.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

impl<T: CredentialStore + ?Sized> CredentialStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

impl<T: Navigator + ?Sized> Navigator for std::sync::Arc<T> {
    fn navigate(&self, route: &str) {
        (**self).navigate(route)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    SignedIn,
    SignedOut,
}

// ============================================================================
// AuthContext
// ============================================================================

/// Process-wide auth state shared by every section's gateway calls: the two
/// credential stores, the login-route navigator, and a push signal that
/// replaces polling for auth changes.
pub struct AuthContext<C, N> {
    persistent: C,
    session: C,
    navigator: N,
    login_route: String,
    state_tx: watch::Sender<AuthState>,
}

impl<C: CredentialStore, N: Navigator> AuthContext<C, N> {
    pub fn new(persistent: C, session: C, navigator: N, login_route: impl Into<String>) -> Self {
        let initial = if lookup_token(&persistent, &session).is_some() {
            AuthState::SignedIn
        } else {
            AuthState::SignedOut
        };
        let (state_tx, _) = watch::channel(initial);
        Self {
            persistent,
            session,
            navigator,
            login_route: login_route.into(),
            state_tx,
        }
    }

    /// Find the bearer token: every candidate key in the persistent store
    /// first, then the session store. `None` means unauthenticated; there is
    /// no fallback token.
    pub fn resolve_token(&self) -> Option<String> {
        lookup_token(&self.persistent, &self.session)
    }

    /// Record a fresh token after login and announce the change.
    pub fn login(&self, token: &str) {
        self.persistent.set(TOKEN_KEYS[0], token);
        self.state_tx.send_replace(AuthState::SignedIn);
        info!("Signed in");
    }

    /// Explicit sign-out: same cleanup as an expired session.
    pub fn logout(&self) {
        self.expire_session();
    }

    /// Token guard for auth-failure statuses. Returns true (handled) for
    /// 401/403 after clearing credentials and navigating to the login route;
    /// the caller must then abort further processing of that response.
    pub fn intercept(&self, status: u16) -> bool {
        if status == 401 || status == 403 {
            warn!(status, "Auth failure from backend; clearing session");
            self.expire_session();
            true
        } else {
            false
        }
    }

    /// Clear every candidate key from both stores, announce sign-out, and
    /// navigate to the login route. Idempotent: concurrent failed calls may
    /// all end up here.
    pub fn expire_session(&self) {
        for key in TOKEN_KEYS {
            self.persistent.remove(key);
            self.session.remove(key);
        }
        self.state_tx.send_replace(AuthState::SignedOut);
        self.navigator.navigate(&self.login_route);
    }

    /// Subscribe to auth-state changes. Login, logout, and guard-triggered
    /// clears all publish here.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state_tx.subscribe()
    }

    pub fn login_route(&self) -> &str {
        &self.login_route
    }

    // ------------------------------------------------------------------
    // Preferences
    // ------------------------------------------------------------------

    /// The persisted "quick edit mode" flag; absent means off.
    pub fn quick_edit_mode(&self) -> bool {
        self.persistent
            .get(QUICK_EDIT_KEY)
            .and_then(|v| bool::from_str(&v).ok())
            .unwrap_or(false)
    }

    pub fn set_quick_edit_mode(&self, enabled: bool) {
        self.persistent.set(QUICK_EDIT_KEY, if enabled { "true" } else { "false" });
    }
}

fn lookup_token<C: CredentialStore>(persistent: &C, session: &C) -> Option<String> {
    for key in TOKEN_KEYS {
        if let Some(token) = persistent.get(key).filter(|t| !t.is_empty()) {
            return Some(token);
        }
    }
    for key in TOKEN_KEYS {
        if let Some(token) = session.get(key).filter(|t| !t.is_empty()) {
            return Some(token);
        }
    }
    None
}

// ============================================================================
// Test utilities
// ============================================================================


#[cfg(test)]
mod tests {
    use super::test_utils::*;
    use super::*;

    fn bare_context() -> AuthContext<InMemoryCredentialStore, SpyNavigator> {
        AuthContext::new(
            InMemoryCredentialStore::new(),
            InMemoryCredentialStore::new(),
            SpyNavigator::new(),
            "/auth",
        )
    }

    #[test]
    fn persistent_store_wins_over_session() {
        let ctx = AuthContext::new(
            InMemoryCredentialStore::new().with("jwt", "from-persistent"),
            InMemoryCredentialStore::new().with("authToken", "from-session"),
            SpyNavigator::new(),
            "/auth",
        );
        assert_eq!(ctx.resolve_token().as_deref(), Some("from-persistent"));
    }

    #[test]
    fn keys_are_checked_in_declared_order() {
        let ctx = AuthContext::new(
            InMemoryCredentialStore::new()
                .with("token", "lower-priority")
                .with("auth_token", "higher-priority"),
            InMemoryCredentialStore::new(),
            SpyNavigator::new(),
            "/auth",
        );
        assert_eq!(ctx.resolve_token().as_deref(), Some("higher-priority"));
    }

    #[test]
    fn session_store_is_consulted_when_persistent_is_empty() {
        let ctx = AuthContext::new(
            InMemoryCredentialStore::new(),
            InMemoryCredentialStore::new().with("bearer_token", "session-token"),
            SpyNavigator::new(),
            "/auth",
        );
        assert_eq!(ctx.resolve_token().as_deref(), Some("session-token"));
    }

    #[test]
    fn no_token_fails_closed() {
        assert_eq!(bare_context().resolve_token(), None);
    }

    #[test]
    fn empty_string_token_is_not_a_token() {
        let ctx = AuthContext::new(
            InMemoryCredentialStore::new().with("authToken", ""),
            InMemoryCredentialStore::new(),
            SpyNavigator::new(),
            "/auth",
        );
        assert_eq!(ctx.resolve_token(), None);
    }

    #[test]
    fn intercept_clears_both_stores_and_navigates_on_401() {
        let ctx = AuthContext::new(
            InMemoryCredentialStore::new().with("authToken", "t1"),
            InMemoryCredentialStore::new().with("accessToken", "t2"),
            SpyNavigator::new(),
            "/auth",
        );
        assert!(ctx.intercept(401));
        assert_eq!(ctx.resolve_token(), None);
        assert!(ctx.persistent.is_empty());
        assert!(ctx.session.is_empty());
        assert_eq!(ctx.navigator.visited(), vec!["/auth".to_string()]);
    }

    #[test]
    fn intercept_handles_403_too() {
        let ctx = context_with_token("t");
        assert!(ctx.intercept(403));
        assert_eq!(ctx.navigator.navigation_count(), 1);
    }

    #[test]
    fn intercept_ignores_other_statuses() {
        let ctx = context_with_token("t");
        for status in [200u16, 400, 404, 422, 500] {
            assert!(!ctx.intercept(status));
        }
        assert_eq!(ctx.resolve_token().as_deref(), Some("t"));
        assert_eq!(ctx.navigator.navigation_count(), 0);
    }

    #[test]
    fn expire_session_is_idempotent() {
        let ctx = context_with_token("t");
        ctx.expire_session();
        ctx.expire_session();
        assert_eq!(ctx.resolve_token(), None);
        assert_eq!(ctx.navigator.navigation_count(), 2);
    }

    #[test]
    fn auth_signal_tracks_login_and_expiry() {
        let ctx = bare_context();
        let rx = ctx.subscribe();
        assert_eq!(*rx.borrow(), AuthState::SignedOut);

        ctx.login("fresh-token");
        assert_eq!(*rx.borrow(), AuthState::SignedIn);
        assert_eq!(ctx.resolve_token().as_deref(), Some("fresh-token"));

        ctx.expire_session();
        assert_eq!(*rx.borrow(), AuthState::SignedOut);
    }

    #[test]
    fn quick_edit_mode_round_trips() {
        let ctx = bare_context();
        assert!(!ctx.quick_edit_mode());
        ctx.set_quick_edit_mode(true);
        assert!(ctx.quick_edit_mode());
        ctx.set_quick_edit_mode(false);
        assert!(!ctx.quick_edit_mode());
    }
}
