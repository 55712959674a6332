use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// User row, serialized in full.
///
/// `GET /users` deliberately exposes whole rows, plaintext password and
/// session token included. That is the contract this API ships with, not an
/// oversight of this module.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub session_id: Option<Uuid>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl User {
    pub async fn create(
        db: &PgPool,
        name: &str,
        email: &str,
        password: &str,
        session_id: Uuid,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, password, session_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, password, session_id, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(email)
        .bind(password)
        .bind(session_id)
        .fetch_one(db)
        .await
    }

    pub async fn list(db: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password, session_id, created_at, updated_at
            FROM users
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password, session_id, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn find_by_session(
        db: &PgPool,
        session_id: Uuid,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password, session_id, created_at, updated_at
            FROM users
            WHERE session_id = $1
            "#,
        )
        .bind(session_id)
        .fetch_optional(db)
        .await
    }

    /// Full-field replace. One conditional statement; zero affected rows
    /// means the id matched nothing.
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET name = $2, email = $3, password = $4, updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(password)
        .execute(db)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(db: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn row_serializes_with_column_names() {
        let user = User {
            id: Uuid::nil(),
            name: "gabriel lima".into(),
            email: "gabriellima@gmail.com".into(),
            password: "12334322".into(),
            session_id: Some(Uuid::nil()),
            created_at: datetime!(2024-01-01 00:00:00 UTC),
            updated_at: datetime!(2024-01-01 00:00:00 UTC),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["name"], "gabriel lima");
        assert_eq!(json["session_id"], Uuid::nil().to_string());
        assert_eq!(json["created_at"], "2024-01-01T00:00:00Z");
        // Plaintext password round-trips through the API by contract.
        assert_eq!(json["password"], "12334322");
    }
}
