use std::fmt;

/// The single credential record gating access to the ledger.
///
/// Stored and compared in plaintext. This mirrors the behaviour of the local
/// single-user tool it serves and is not a suitable scheme for any shared
/// deployment, which would need salted-hash verification instead.
#[derive(Clone, PartialEq, Eq)]
pub struct UserCredentials {
    pub username: String,
    pub password: String,
}

impl UserCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub(crate) fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl Default for UserCredentials {
    fn default() -> Self {
        Self::new("admin", "admin123")
    }
}

impl fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
