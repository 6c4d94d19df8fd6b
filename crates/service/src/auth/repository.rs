use async_trait::async_trait;

use super::domain::UserCredential;
use super::errors::RepositoryError;

/// Lookup-by-email capability consumed by the login pipeline.
///
/// A missing record is `Ok(None)`; `Err` is reserved for backend faults so the
/// service can tell "no such user" from "database down".
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredential>, RepositoryError>;
}

/// Simple in-memory mock repository for tests, benches and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use uuid::Uuid;

    use crate::auth::errors::AuthError;
    use crate::auth::password::hash_password;

    #[derive(Default)]
    pub struct MockUserRepository {
        users: Mutex<HashMap<String, UserCredential>>, // key: email, as stored
        failure: Mutex<Option<String>>,
        lookups: AtomicUsize,
    }

    impl MockUserRepository {
        pub fn insert(&self, cred: UserCredential) {
            self.users.lock().unwrap().insert(cred.email.clone(), cred);
        }

        /// Store a user whose hash is derived from `password`.
        pub fn insert_user(&self, email: &str, password: &str) -> Result<UserCredential, AuthError> {
            let cred = UserCredential {
                id: Uuid::new_v4(),
                email: email.to_string(),
                password_hash: hash_password(password)?,
            };
            self.insert(cred.clone());
            Ok(cred)
        }

        /// Make every subsequent lookup fail as if the backend were unreachable.
        pub fn fail_lookups(&self, reason: &str) {
            *self.failure.lock().unwrap() = Some(reason.to_string());
        }

        /// Number of `find_by_email` calls so far.
        pub fn lookups(&self) -> usize {
            self.lookups.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_by_email(&self, email: &str) -> Result<Option<UserCredential>, RepositoryError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            if let Some(reason) = self.failure.lock().unwrap().clone() {
                return Err(RepositoryError::Unavailable(reason));
            }
            let users = self.users.lock().unwrap();
            Ok(users.get(email).cloned())
        }
    }
}
