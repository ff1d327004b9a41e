// SPDX-License-Identifier: GPL-3.0-only

//! Demo guest login for the order pages.
//!
//! There is no real authentication: a syntactically valid email and reservation code are enough,
//! and the resulting flag is kept in a single JSON document on disk.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const AUTH_FILE_NAME: &str = "abs-auth.json";
const MIN_CODE_LEN: usize = 6;
const MAX_CODE_LEN: usize = 12;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("valid email regex")
});

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user_email: Option<String>,
    pub reservation_code: Option<String>,
}

/// Trims and lowercases a valid email
pub fn validate_email(email: &str) -> Result<String> {
    let email = email.trim();
    if EMAIL_REGEX.is_match(email) {
        Ok(email.to_ascii_lowercase())
    } else {
        Err(Error::InvalidEmail)
    }
}

/// Reservation codes are 6 to 12 ASCII letters or digits, returned upper cased
pub fn validate_reservation_code(code: &str) -> Result<String> {
    let code = code.trim();
    let valid_len = (MIN_CODE_LEN..=MAX_CODE_LEN).contains(&code.len());
    if valid_len && code.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(Error::InvalidReservationCode)
    }
}

/// Where the auth flag lives
#[derive(Debug, Clone)]
pub struct AuthStore {
    path: PathBuf,
}

impl AuthStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(AUTH_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing or unreadable file means logged out
    pub fn load(&self) -> AuthState {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                tracing::warn!("ignoring invalid auth state at {}: {err}", self.path.display());
                AuthState::default()
            }),
            Err(err) if err.kind() == ErrorKind::NotFound => AuthState::default(),
            Err(err) => {
                tracing::warn!("could not read {}: {err}", self.path.display());
                AuthState::default()
            }
        }
    }

    pub fn save(&self, state: &AuthState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(state)?)?;
        Ok(())
    }

    /// Validates the credentials and persists the authenticated state
    pub fn login(&self, email: &str, reservation_code: &str) -> Result<AuthState> {
        let email = validate_email(email)?;
        let reservation_code = validate_reservation_code(reservation_code)?;

        let state = AuthState {
            is_authenticated: true,
            user_email: Some(email),
            reservation_code: Some(reservation_code),
        };
        self.save(&state)?;
        tracing::info!("guest logged in for reservation {:?}", state.reservation_code);
        Ok(state)
    }

    pub fn logout(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn email_validation() {
        assert_eq!(validate_email("  Guest@Example.com ").unwrap(), "guest@example.com");
        assert!(validate_email("guest@example").is_err());
        assert!(validate_email("guest example.com").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn reservation_code_validation() {
        assert_eq!(validate_reservation_code(" abs123 ").unwrap(), "ABS123");
        assert!(matches!(
            validate_reservation_code("AB12"),
            Err(Error::InvalidReservationCode)
        ));
        assert!(validate_reservation_code("ABS-123").is_err());
        assert!(validate_reservation_code("ABCDEFGHIJKLM").is_err());
    }

    #[test]
    fn login_persists_and_logout_clears() {
        let dir = tempfile::tempdir().unwrap();
        let store = AuthStore::in_dir(&dir.path().join("nested"));

        assert_eq!(store.load(), AuthState::default());

        let state = store.login("guest@example.com", "abs123").unwrap();
        assert!(state.is_authenticated);
        assert_eq!(store.load(), state);

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"isAuthenticated\": true"));
        assert!(raw.contains("\"reservationCode\": \"ABS123\""));

        store.logout().unwrap();
        assert_eq!(store.load(), AuthState::default());
        // logging out twice is fine
        store.logout().unwrap();
    }

    #[test]
    fn invalid_credentials_are_not_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let store = AuthStore::in_dir(dir.path());

        assert!(matches!(store.login("nope", "ABS123"), Err(Error::InvalidEmail)));
        assert!(!store.path().exists());
    }

    #[test]
    fn corrupt_files_mean_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = AuthStore::in_dir(dir.path());
        fs::write(store.path(), "{not json").unwrap();

        assert_eq!(store.load(), AuthState::default());
    }
}
