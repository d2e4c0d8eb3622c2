//! Route definitions for the `/divisions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::division;
use crate::state::AppState;

/// Routes for divisions.
///
/// ```text
/// GET    /divisions         -> list
/// POST   /divisions         -> create
/// GET    /divisions/{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    let collection = get(division::list).post(division::create);

    Router::new()
        .route("/divisions", collection.clone())
        .route("/divisions/", collection)
        .route("/divisions/{id}", get(division::get_by_id))
}
