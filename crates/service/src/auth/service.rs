use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info, instrument};

use super::domain::LoginInput;
use super::errors::AuthError;
use super::password::verify_password;
use super::repository::UserRepository;
use super::token::{Claims, JwtSigner, TokenSigner};
use super::validation::validate_login;

/// Auth service configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
}

/// Login pipeline independent of web framework. Holds no mutable state;
/// share it behind an `Arc`.
pub struct AuthService {
    repo: Arc<dyn UserRepository>,
    signer: Arc<dyn TokenSigner>,
}

impl AuthService {
    /// Build with the HS256 signer keyed by `cfg.jwt_secret`.
    pub fn new(repo: Arc<dyn UserRepository>, cfg: AuthConfig) -> Self {
        let signer = Arc::new(JwtSigner::new(cfg.jwt_secret.as_bytes()));
        Self::with_signer(repo, signer)
    }

    pub fn with_signer(repo: Arc<dyn UserRepository>, signer: Arc<dyn TokenSigner>) -> Self {
        Self { repo, signer }
    }

    /// Authenticate by email and password and issue a session token.
    ///
    /// Input is validated before the repository is touched. An unknown email
    /// and a wrong password both yield [`AuthError::InvalidCredentials`].
    ///
    /// # Examples
    /// ```
    /// use service::auth::{AuthConfig, AuthService, repository::mock::MockUserRepository};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockUserRepository::default());
    /// repo.insert_user("valid@test.ru", "password123").unwrap();
    /// let svc = AuthService::new(repo, AuthConfig { jwt_secret: "secret".into() });
    /// let token = tokio_test::block_on(svc.login("valid@test.ru", "password123")).unwrap();
    /// assert!(!token.is_empty());
    /// ```
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        if let Err(e) = validate_login(email, password) {
            debug!(error = %e, "login input rejected");
            return Err(e);
        }

        let user = match self.repo.find_by_email(email).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                debug!("no credential record for email");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => {
                error!(error = %e, "credential lookup failed");
                return Err(e.into());
            }
        };

        // argon2 is deliberately slow; keep it off the async workers
        let plain = password.to_owned();
        let hash = user.password_hash.clone();
        let matched = tokio::task::spawn_blocking(move || verify_password(&plain, &hash))
            .await
            .map_err(|e| {
                error!(error = %e, "password verification task failed");
                AuthError::Internal(format!("password verification task failed: {e}"))
            })?;
        if !matched {
            debug!(user_id = %user.id, "password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let claims = Claims::new(user.id, Utc::now());
        let token = self.signer.sign(&claims).map_err(|e| {
            error!(error = %e, user_id = %user.id, "token signing failed");
            AuthError::from(e)
        })?;

        info!(user_id = %user.id, exp = claims.exp, "login_succeeded");
        Ok(token)
    }

    /// Same as [`login`](Self::login), taking the decoded request body.
    pub async fn login_input(&self, input: LoginInput) -> Result<String, AuthError> {
        self.login(&input.email, &input.password).await
    }
}
