use std::fmt;

/// The single admin login.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    username: String,
    password: String,
}

impl AdminCredentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns true when both fields match exactly.
    ///
    /// Both comparisons always run so a wrong username and a wrong password
    /// take the same path.
    #[must_use]
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let user_ok = eq_bytes(self.username.as_bytes(), username.as_bytes());
        let pass_ok = eq_bytes(self.password.as_bytes(), password.as_bytes());
        user_ok & pass_ok
    }
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self::new("admin", "password")
    }
}

// Never print the password.
impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn eq_bytes(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
