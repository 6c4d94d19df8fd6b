use thiserror::Error;

use super::validation::MIN_PASSWORD_LEN;

/// Business errors for the login workflow.
///
/// `InvalidCredentials` covers both an unknown email and a wrong password so
/// callers cannot tell the two apart.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("password must be at least {} characters long", MIN_PASSWORD_LEN)]
    PasswordTooShort,
    #[error("invalid email")]
    InvalidEmail,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            AuthError::PasswordTooShort => 1001,
            AuthError::InvalidEmail => 1002,
            AuthError::InvalidCredentials => 1004,
            AuthError::Internal(_) => 1200,
        }
    }

    /// Infrastructure faults, as opposed to rejections of user input.
    pub fn is_internal(&self) -> bool {
        matches!(self, AuthError::Internal(_))
    }
}

/// Lookup backend failures. "Not found" is never an error; see
/// [`UserRepository`](super::repository::UserRepository).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("backend unavailable: {0}")]
    Unavailable(String),
    #[error("query failed: {0}")]
    Query(String),
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("signing secret is not configured")]
    MissingSecret,
    #[error("token expired")]
    Expired,
    #[error("jwt error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

impl From<RepositoryError> for AuthError {
    fn from(e: RepositoryError) -> Self {
        AuthError::Internal(e.to_string())
    }
}

impl From<TokenError> for AuthError {
    fn from(e: TokenError) -> Self {
        AuthError::Internal(e.to_string())
    }
}
