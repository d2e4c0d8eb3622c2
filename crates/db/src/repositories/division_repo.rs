//! Repository for the `divisions` table.

use roster_core::pagination::Page;
use roster_core::types::DbId;
use sqlx::SqliteConnection;

use crate::models::division::{CreateDivision, Division};

const COLUMNS: &str = "id, weight";

pub struct DivisionRepo;

impl DivisionRepo {
    /// Insert a new division, returning the created row.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CreateDivision,
    ) -> Result<Division, sqlx::Error> {
        let query = format!("INSERT INTO divisions (weight) VALUES (?1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Division>(&query)
            .bind(input.weight)
            .fetch_one(conn)
            .await
    }

    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<Division>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM divisions WHERE id = ?1");
        sqlx::query_as::<_, Division>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// List one page of divisions, ordered by id.
    pub async fn list(
        conn: &mut SqliteConnection,
        page: Page,
    ) -> Result<Vec<Division>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM divisions ORDER BY id LIMIT ?1 OFFSET ?2");
        sqlx::query_as::<_, Division>(&query)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(conn)
            .await
    }
}
