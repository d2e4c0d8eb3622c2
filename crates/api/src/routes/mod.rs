pub mod country;
pub mod division;
pub mod fighter;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree (mounted at the root, next to `/health`).
///
/// Route hierarchy:
///
/// ```text
/// /fighters                 list, create
/// /fighters/{id}            get, patch, delete
///
/// /divisions                list, create
/// /divisions/{id}           get
///
/// /Countries                list, create
/// /Countries/{id}           get
/// ```
///
/// Collection paths also answer with a trailing slash, and `/countries` is
/// accepted as a lowercase alias of `/Countries`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(fighter::router())
        .merge(division::router())
        .merge(country::router())
}
