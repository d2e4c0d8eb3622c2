//! Country entity model and DTOs.

use roster_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `countries` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Country {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new country.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCountry {
    pub name: String,
}
