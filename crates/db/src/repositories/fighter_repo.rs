//! Repository for the `fighters` table.

use roster_core::pagination::Page;
use roster_core::types::DbId;
use sqlx::SqliteConnection;

use crate::models::fighter::{CreateFighter, Fighter, UpdateFighter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, age, secret_nickname";

/// Provides CRUD operations for fighters.
pub struct FighterRepo;

impl FighterRepo {
    /// Insert a new fighter, returning the created row with its assigned id.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CreateFighter,
    ) -> Result<Fighter, sqlx::Error> {
        let query = format!(
            "INSERT INTO fighters (name, age, secret_nickname)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Fighter>(&query)
            .bind(&input.name)
            .bind(input.age)
            .bind(&input.secret_nickname)
            .fetch_one(conn)
            .await
    }

    /// Find a fighter by id.
    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<Fighter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fighters WHERE id = ?1");
        sqlx::query_as::<_, Fighter>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// List one page of fighters, ordered by id.
    pub async fn list(conn: &mut SqliteConnection, page: Page) -> Result<Vec<Fighter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fighters ORDER BY id LIMIT ?1 OFFSET ?2");
        sqlx::query_as::<_, Fighter>(&query)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(conn)
            .await
    }

    /// Apply a partial update. Only fields set in `input` are written.
    ///
    /// Each column is guarded by a "was supplied" flag rather than `COALESCE`,
    /// so `age` can be cleared to NULL. Returns `None` if no row has `id`.
    pub async fn update(
        conn: &mut SqliteConnection,
        id: DbId,
        input: &UpdateFighter,
    ) -> Result<Option<Fighter>, sqlx::Error> {
        let query = format!(
            "UPDATE fighters SET
                name            = CASE WHEN ?2 THEN ?3 ELSE name END,
                age             = CASE WHEN ?4 THEN ?5 ELSE age END,
                secret_nickname = CASE WHEN ?6 THEN ?7 ELSE secret_nickname END
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Fighter>(&query)
            .bind(id)
            .bind(input.name.is_set())
            .bind(input.name.as_ref().into_option().map(String::as_str))
            .bind(input.age.is_set())
            .bind(input.age.into_option().flatten())
            .bind(input.secret_nickname.is_set())
            .bind(input.secret_nickname.as_ref().into_option().map(String::as_str))
            .fetch_optional(conn)
            .await
    }

    /// Permanently delete a fighter. Returns `true` if a row was removed.
    pub async fn delete(conn: &mut SqliteConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM fighters WHERE id = ?1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
