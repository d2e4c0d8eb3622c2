//! Division entity model and DTOs.

use roster_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `divisions` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Division {
    pub id: DbId,
    pub weight: Option<i64>,
}

/// DTO for creating a new division. A client-supplied `id` is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateDivision {
    pub weight: Option<i64>,
}
