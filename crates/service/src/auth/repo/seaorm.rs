use sea_orm::DatabaseConnection;

use models::errors::ModelError;

use crate::auth::domain::UserCredential;
use crate::auth::errors::RepositoryError;
use crate::auth::repository::UserRepository;

/// Postgres-backed lookup over the `users` table. The connection is a pool;
/// clones share it.
#[derive(Clone)]
pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredential>, RepositoryError> {
        let res = models::user::find_by_email(&self.db, email)
            .await
            .map_err(|e| match e {
                ModelError::Unavailable(msg) => RepositoryError::Unavailable(msg),
                other => RepositoryError::Query(other.to_string()),
            })?;
        Ok(res.map(|u| UserCredential { id: u.id, email: u.email, password_hash: u.password_hash }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lookups_without_a_connection_report_unavailable() {
        let repo = SeaOrmUserRepository { db: DatabaseConnection::Disconnected };
        for email in ["valid@test.ru", ""] {
            let err = repo.find_by_email(email).await.unwrap_err();
            assert!(matches!(err, RepositoryError::Unavailable(_)), "{email:?}: {err:?}");
        }
    }
}
