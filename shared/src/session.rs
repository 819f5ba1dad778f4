//! Admin session gate.
//!
//! Being "logged in" means a token string exists under the session key. The
//! token is never inspected; it only has to be present. This is a UI gate for
//! a local console, not an authentication scheme.

use crate::{config::StoreConfig, error::StoreResult, storage::KeyValueStorage};

const TOKEN_PREFIX: &str = "mock_jwt_token_";

/// The admin email/password pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Accepted email.
    pub email: String,
    /// Accepted password.
    pub password: String,
}

impl Credentials {
    /// Exact, case-sensitive comparison of both fields.
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

/// Admin session backed by a token in session storage.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionGate<S> {
    storage: S,
    session_key: String,
    credentials: Credentials,
    authenticated: bool,
}

impl<S: KeyValueStorage> SessionGate<S> {
    /// Derive the flag from whatever token the session storage already holds.
    pub fn open(storage: S, config: &StoreConfig) -> StoreResult<Self> {
        let authenticated = storage.get_item(&config.session_key)?.is_some();
        Ok(Self::with_flag(storage, config, authenticated))
    }

    /// Like [`SessionGate::open`], but an unreadable session store counts as
    /// signed out.
    pub fn open_or_signed_out(storage: S, config: &StoreConfig) -> Self {
        let authenticated = match storage.get_item(&config.session_key) {
            Ok(token) => token.is_some(),
            Err(err) => {
                tracing::warn!(error = %err, "session storage unreadable, signing out");
                false
            },
        };
        Self::with_flag(storage, config, authenticated)
    }

    fn with_flag(storage: S, config: &StoreConfig, authenticated: bool) -> Self {
        Self {
            storage,
            session_key: config.session_key.clone(),
            credentials: Credentials {
                email: config.admin_email.clone(),
                password: config.admin_password.clone(),
            },
            authenticated,
        }
    }

    /// True while a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Check the pair and, on a match, store a fresh token. Returns whether
    /// the login succeeded; a mismatch leaves the session untouched.
    pub fn login(&mut self, email: &str, password: &str, now_ms: i64) -> StoreResult<bool> {
        if !self.credentials.matches(email, password) {
            tracing::debug!("rejected admin login");
            return Ok(false);
        }

        let token = format!("{TOKEN_PREFIX}{now_ms}");
        self.storage.set_item(&self.session_key, &token)?;
        self.authenticated = true;
        tracing::debug!("admin session opened");
        Ok(true)
    }

    /// Remove the token.
    pub fn logout(&mut self) -> StoreResult<()> {
        self.storage.remove_item(&self.session_key)?;
        self.authenticated = false;
        Ok(())
    }

    /// The stored token, if any.
    pub fn token(&self) -> StoreResult<Option<String>> {
        self.storage.get_item(&self.session_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn gate(storage: &MemoryStorage) -> SessionGate<MemoryStorage> {
        SessionGate::open(storage.clone(), &StoreConfig::default()).expect("open gate")
    }

    #[test]
    fn valid_credentials_store_a_token() {
        let storage = MemoryStorage::new();
        let mut gate = gate(&storage);
        assert!(!gate.is_authenticated());

        assert!(gate
            .login("admin@omeganews.com", "admin123", 1_700_000_000_000)
            .expect("login"));
        assert!(gate.is_authenticated());
        assert_eq!(
            storage.get_item("omega_admin_token").expect("get token").as_deref(),
            Some("mock_jwt_token_1700000000000")
        );
    }

    #[test]
    fn any_other_pair_is_rejected() {
        let storage = MemoryStorage::new();
        let mut gate = gate(&storage);
        for (email, password) in [
            ("admin@omeganews.com", "wrong"),
            ("someone@omeganews.com", "admin123"),
            ("ADMIN@omeganews.com", "admin123"),
            ("", ""),
        ] {
            assert!(!gate.login(email, password, 1).expect("login"));
            assert!(!gate.is_authenticated());
        }
        assert!(storage.is_empty());
    }

    #[test]
    fn flag_follows_token_presence_across_reopen() {
        let storage = MemoryStorage::new();
        let mut first = gate(&storage);
        first.login("admin@omeganews.com", "admin123", 7).expect("login");

        let mut reopened = gate(&storage);
        assert!(reopened.is_authenticated());

        reopened.logout().expect("logout");
        assert!(!reopened.is_authenticated());
        assert!(!gate(&storage).is_authenticated());
    }

    #[test]
    fn any_token_string_counts_as_logged_in() {
        let storage = MemoryStorage::new();
        storage.set_item("omega_admin_token", "x").expect("set token");
        assert!(gate(&storage).is_authenticated());
    }
}
