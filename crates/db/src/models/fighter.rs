//! Fighter entity model and DTOs.

use roster_core::patch::Patch;
use roster_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A full row from the `fighters` table.
///
/// Deliberately not `Serialize`: responses go through [`FighterPublic`] so
/// `secret_nickname` cannot leak.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Fighter {
    pub id: DbId,
    pub name: String,
    pub age: Option<i64>,
    pub secret_nickname: String,
}

/// The client-visible projection of a fighter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FighterPublic {
    pub id: DbId,
    pub name: String,
    pub age: Option<i64>,
}

impl From<Fighter> for FighterPublic {
    fn from(fighter: Fighter) -> Self {
        Self {
            id: fighter.id,
            name: fighter.name,
            age: fighter.age,
        }
    }
}

/// DTO for creating a new fighter.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFighter {
    pub name: String,
    pub age: Option<i64>,
    pub secret_nickname: String,
}

/// DTO for partially updating a fighter. Omitted fields keep their stored value.
///
/// `age` accepts `null` to clear it; `name` and `secret_nickname` do not.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFighter {
    #[serde(default)]
    pub name: Patch<String>,
    #[serde(default)]
    pub age: Patch<Option<i64>>,
    #[serde(default)]
    pub secret_nickname: Patch<String>,
}
