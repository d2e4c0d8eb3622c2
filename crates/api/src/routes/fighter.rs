//! Route definitions for the `/fighters` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::fighter;
use crate::state::AppState;

/// Routes for fighters.
///
/// ```text
/// GET    /fighters          -> list
/// POST   /fighters          -> create
/// GET    /fighters/{id}     -> get_by_id
/// PATCH  /fighters/{id}     -> update
/// DELETE /fighters/{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    let collection = get(fighter::list).post(fighter::create);

    Router::new()
        .route("/fighters", collection.clone())
        .route("/fighters/", collection)
        .route(
            "/fighters/{id}",
            get(fighter::get_by_id)
                .patch(fighter::update)
                .delete(fighter::delete),
        )
}
