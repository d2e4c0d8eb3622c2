//! Handlers for the `/fighters` resource.
//!
//! Every response goes through [`FighterPublic`], so `secret_nickname` is
//! accepted on input but never returned.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use roster_core::error::CoreError;
use roster_core::pagination::Page;
use roster_core::types::DbId;
use roster_db::models::fighter::{CreateFighter, FighterPublic, UpdateFighter};
use roster_db::repositories::FighterRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::PaginationParams;
use crate::response::DeletedResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Fighter",
        id,
    })
}

/// POST /fighters
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateFighter>,
) -> AppResult<(StatusCode, Json<FighterPublic>)> {
    let mut session = state.db.acquire().await?;
    let mut tx = session.begin().await?;
    let fighter = FighterRepo::create(&mut tx, &input).await?;
    tx.commit().await?;

    tracing::info!(fighter_id = fighter.id, "Fighter created");
    Ok((StatusCode::CREATED, Json(fighter.into())))
}

/// GET /fighters?offset=&limit=
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<Json<Vec<FighterPublic>>> {
    let page = Page::new(params.offset, params.limit)?;

    let mut session = state.db.acquire().await?;
    let fighters = FighterRepo::list(session.conn(), page).await?;
    Ok(Json(fighters.into_iter().map(FighterPublic::from).collect()))
}

/// GET /fighters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<FighterPublic>> {
    let mut session = state.db.acquire().await?;
    let fighter = FighterRepo::find_by_id(session.conn(), id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(fighter.into()))
}

/// PATCH /fighters/{id}
///
/// Only the fields present in the body are written.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateFighter>,
) -> AppResult<Json<FighterPublic>> {
    let mut session = state.db.acquire().await?;
    let mut tx = session.begin().await?;
    let fighter = FighterRepo::update(&mut tx, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tx.commit().await?;

    tracing::info!(fighter_id = id, "Fighter updated");
    Ok(Json(fighter.into()))
}

/// DELETE /fighters/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DeletedResponse>> {
    let mut session = state.db.acquire().await?;
    let mut tx = session.begin().await?;
    if !FighterRepo::delete(&mut tx, id).await? {
        return Err(not_found(id));
    }
    tx.commit().await?;

    tracing::info!(fighter_id = id, "Fighter deleted");
    Ok(Json(DeletedResponse::ok()))
}
