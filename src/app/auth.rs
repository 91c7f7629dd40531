//! Authentication gate for the statistics dashboard.
//!
//! Kept behind a trait so the rest of the app never sees the credential
//! source.

/// Verifies an entered admin credential.
pub trait AdminGate {
    fn verify(&self, password: &str) -> bool;
}

/// Gate backed by a secret supplied at startup (normally the
/// `SWIFTREAD_ADMIN_PASSWORD` environment variable). Without a secret the
/// dashboard stays locked.
pub struct SecretGate {
    secret: Option<String>,
}

impl SecretGate {
    pub fn new(secret: Option<String>) -> Self {
        let secret = secret.filter(|s| !s.is_empty());
        Self { secret }
    }

    pub fn from_env() -> Self {
        Self::new(std::env::var("SWIFTREAD_ADMIN_PASSWORD").ok())
    }
}

impl AdminGate for SecretGate {
    fn verify(&self, password: &str) -> bool {
        match &self.secret {
            Some(secret) => secret == password,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_password_unlocks() {
        let gate = SecretGate::new(Some("hunter2".to_string()));
        assert!(gate.verify("hunter2"));
    }

    #[test]
    fn test_wrong_password_rejected() {
        let gate = SecretGate::new(Some("hunter2".to_string()));
        assert!(!gate.verify("hunter3"));
        assert!(!gate.verify(""));
    }

    #[test]
    fn test_missing_secret_never_unlocks() {
        let gate = SecretGate::new(None);
        assert!(!gate.verify("anything"));
        assert!(!gate.verify(""));
    }

    #[test]
    fn test_empty_secret_treated_as_missing() {
        let gate = SecretGate::new(Some(String::new()));
        assert!(!gate.verify(""));
    }
}
