//! Handlers for the `/divisions` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use roster_core::error::CoreError;
use roster_core::pagination::Page;
use roster_core::types::DbId;
use roster_db::models::division::{CreateDivision, Division};
use roster_db::repositories::DivisionRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::PaginationParams;
use crate::state::AppState;

/// POST /divisions
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateDivision>,
) -> AppResult<(StatusCode, Json<Division>)> {
    let mut session = state.db.acquire().await?;
    let mut tx = session.begin().await?;
    let division = DivisionRepo::create(&mut tx, &input).await?;
    tx.commit().await?;

    tracing::info!(division_id = division.id, "Division created");
    Ok((StatusCode::CREATED, Json(division)))
}

/// GET /divisions?offset=&limit=
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<Json<Vec<Division>>> {
    let page = Page::new(params.offset, params.limit)?;

    let mut session = state.db.acquire().await?;
    let divisions = DivisionRepo::list(session.conn(), page).await?;
    Ok(Json(divisions))
}

/// GET /divisions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Division>> {
    let mut session = state.db.acquire().await?;
    let division = DivisionRepo::find_by_id(session.conn(), id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Division",
            id,
        }))?;
    Ok(Json(division))
}
