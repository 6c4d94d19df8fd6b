use serde::Deserialize;
use uuid::Uuid;

/// Login input as decoded by the transport.
#[derive(Clone, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginInput")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Credential record resolved by email. `password_hash` is a PHC string with
/// the algorithm, cost parameters and salt embedded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCredential {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
}
