//! Repository for the `countries` table.

use roster_core::pagination::Page;
use roster_core::types::DbId;
use sqlx::SqliteConnection;

use crate::models::country::{Country, CreateCountry};

const COLUMNS: &str = "id, name";

pub struct CountryRepo;

impl CountryRepo {
    /// Insert a new country, returning the created row.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CreateCountry,
    ) -> Result<Country, sqlx::Error> {
        let query = format!("INSERT INTO countries (name) VALUES (?1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Country>(&query)
            .bind(&input.name)
            .fetch_one(conn)
            .await
    }

    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<Country>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM countries WHERE id = ?1");
        sqlx::query_as::<_, Country>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    pub async fn list(
        conn: &mut SqliteConnection,
        page: Page,
    ) -> Result<Vec<Country>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM countries ORDER BY id LIMIT ?1 OFFSET ?2");
        sqlx::query_as::<_, Country>(&query)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(conn)
            .await
    }
}
