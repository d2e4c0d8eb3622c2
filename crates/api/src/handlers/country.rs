//! Handlers for the `/Countries` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use roster_core::error::CoreError;
use roster_core::pagination::Page;
use roster_core::types::DbId;
use roster_db::models::country::{Country, CreateCountry};
use roster_db::repositories::CountryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::PaginationParams;
use crate::state::AppState;

/// POST /Countries
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCountry>,
) -> AppResult<(StatusCode, Json<Country>)> {
    let mut session = state.db.acquire().await?;
    let mut tx = session.begin().await?;
    let country = CountryRepo::create(&mut tx, &input).await?;
    tx.commit().await?;

    tracing::info!(country_id = country.id, "Country created");
    Ok((StatusCode::CREATED, Json(country)))
}

/// GET /Countries?offset=&limit=
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<Json<Vec<Country>>> {
    let page = Page::new(params.offset, params.limit)?;

    let mut session = state.db.acquire().await?;
    let countries = CountryRepo::list(session.conn(), page).await?;
    Ok(Json(countries))
}

/// GET /Countries/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Country>> {
    let mut session = state.db.acquire().await?;
    let country = CountryRepo::find_by_id(session.conn(), id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Country",
            id,
        }))?;
    Ok(Json(country))
}
