use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Meal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub is_on_diet: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Per-user aggregate counts partitioned by the diet flag.
#[derive(Debug, Clone, Copy)]
pub struct MealMetrics {
    pub total: i64,
    pub on_diet: i64,
    pub off_diet: i64,
}

impl Meal {
    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        name: &str,
        description: &str,
        is_on_diet: bool,
    ) -> Result<Meal, sqlx::Error> {
        sqlx::query_as::<_, Meal>(
            r#"
            INSERT INTO meals (id, user_id, name, description, is_on_diet)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, name, description, is_on_diet, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(name)
        .bind(description)
        .bind(is_on_diet)
        .fetch_one(db)
        .await
    }

    /// Owned meals in insertion order.
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> Result<Vec<Meal>, sqlx::Error> {
        sqlx::query_as::<_, Meal>(
            r#"
            SELECT id, user_id, name, description, is_on_diet, created_at, updated_at
            FROM meals
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }

    /// Filtered by id AND owner: a foreign-owned meal is indistinguishable
    /// from an absent one.
    pub async fn find_by_id(
        db: &PgPool,
        user_id: Uuid,
        meal_id: Uuid,
    ) -> Result<Option<Meal>, sqlx::Error> {
        sqlx::query_as::<_, Meal>(
            r#"
            SELECT id, user_id, name, description, is_on_diet, created_at, updated_at
            FROM meals
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(meal_id)
        .bind(user_id)
        .fetch_optional(db)
        .await
    }

    /// Full-field replace in one conditional statement. Zero affected rows
    /// covers both "absent" and "not owned".
    pub async fn update(
        db: &PgPool,
        user_id: Uuid,
        meal_id: Uuid,
        name: &str,
        description: &str,
        is_on_diet: bool,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE meals
            SET name = $3, description = $4, is_on_diet = $5, updated_at = now()
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(meal_id)
        .bind(user_id)
        .bind(name)
        .bind(description)
        .bind(is_on_diet)
        .execute(db)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(db: &PgPool, user_id: Uuid, meal_id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM meals WHERE id = $1 AND user_id = $2")
            .bind(meal_id)
            .bind(user_id)
            .execute(db)
            .await?;
        Ok(result.rows_affected())
    }

    /// Three independent counts; the total is its own scan, not the sum of
    /// the partitions.
    pub async fn metrics(db: &PgPool, user_id: Uuid) -> Result<MealMetrics, sqlx::Error> {
        let on_diet = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM meals WHERE user_id = $1 AND is_on_diet = TRUE",
        )
        .bind(user_id)
        .fetch_one(db)
        .await?;

        let off_diet = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM meals WHERE user_id = $1 AND is_on_diet = FALSE",
        )
        .bind(user_id)
        .fetch_one(db)
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM meals WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(db)
            .await?;

        Ok(MealMetrics {
            total,
            on_diet,
            off_diet,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn row_serializes_with_column_names() {
        let meal = Meal {
            id: Uuid::nil(),
            user_id: Uuid::nil(),
            name: "Banana with whey".into(),
            description: "Breakfast".into(),
            is_on_diet: true,
            created_at: datetime!(2024-01-01 08:00:00 UTC),
            updated_at: datetime!(2024-01-01 08:00:00 UTC),
        };
        let json = serde_json::to_value(&meal).unwrap();
        assert_eq!(json["name"], "Banana with whey");
        assert_eq!(json["is_on_diet"], true);
        assert_eq!(json["user_id"], Uuid::nil().to_string());
        assert_eq!(json["created_at"], "2024-01-01T08:00:00Z");
    }
}
