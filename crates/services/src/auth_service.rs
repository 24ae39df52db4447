use quizbook_core::model::AdminCredentials;

/// Checks login attempts against the single admin credential pair.
#[derive(Debug, Clone, Default)]
pub struct AdminAuth {
    credentials: AdminCredentials,
}

impl AdminAuth {
    #[must_use]
    pub fn new(credentials: AdminCredentials) -> Self {
        Self { credentials }
    }

    /// Returns true if `username`/`password` are the admin credentials.
    #[must_use]
    pub fn login(&self, username: &str, password: &str) -> bool {
        let ok = self.credentials.verify(username, password);
        if ok {
            tracing::info!(username, "admin login succeeded");
        } else {
            tracing::info!(username, "admin login rejected");
        }
        ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_the_configured_pair() {
        let auth = AdminAuth::new(AdminCredentials::new("registrar", "s3cret"));
        assert!(auth.login("registrar", "s3cret"));
        assert!(!auth.login("admin", "password"));
        assert!(!auth.login("registrar", ""));
    }

    #[test]
    fn default_is_admin_password() {
        assert!(AdminAuth::default().login("admin", "password"));
    }
}
