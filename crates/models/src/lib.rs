pub mod errors;
pub mod db;
pub mod user;

#[cfg(test)]
mod tests {
    use configs::DatabaseConfig;
    use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};
    use uuid::Uuid;

    use crate::{db, user};

    #[test]
    fn connect_options_follow_config() {
        let cfg = DatabaseConfig {
            url: "postgres://u:p@localhost/seating".into(),
            max_connections: 7,
            min_connections: 2,
            ..DatabaseConfig::default()
        };
        let opt = db::connect_options(&cfg);
        assert_eq!(opt.get_url(), "postgres://u:p@localhost/seating");
        assert_eq!(opt.get_max_connections(), Some(7));
        assert_eq!(opt.get_min_connections(), Some(2));
    }

    #[tokio::test]
    async fn find_by_email_is_exact_match() {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return;
        }
        let db = match db::connect().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return;
            }
        };
        if let Err(e) = db
            .execute_unprepared(
                "CREATE TABLE IF NOT EXISTS users (
                    id UUID PRIMARY KEY,
                    email TEXT NOT NULL UNIQUE,
                    password_hash TEXT NOT NULL
                )",
            )
            .await
        {
            eprintln!("skip: cannot prepare users table: {}", e);
            return;
        }

        let email = format!("case_{}@test.ru", Uuid::new_v4());
        let row = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email.clone()),
            password_hash: Set("$argon2id$placeholder".into()),
        }
        .insert(&db)
        .await
        .expect("insert user");

        let found = user::find_by_email(&db, &email).await.expect("lookup");
        assert_eq!(found.map(|u| u.id), Some(row.id));

        let upper = user::find_by_email(&db, &email.to_uppercase()).await.expect("lookup");
        assert!(upper.is_none());

        let missing = user::find_by_email(&db, "nobody@test.ru").await.expect("lookup");
        assert!(missing.is_none());

        user::Entity::delete_by_id(row.id).exec(&db).await.expect("cleanup");
    }
}
