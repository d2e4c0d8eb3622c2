//! Route definitions for the `/Countries` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::country;
use crate::state::AppState;

/// Routes for countries, under both `/Countries` and `/countries`.
///
/// ```text
/// GET    /Countries         -> list
/// POST   /Countries         -> create
/// GET    /Countries/{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    ["/Countries", "/countries"]
        .into_iter()
        .fold(Router::new(), |router, base| {
            let collection = get(country::list).post(country::create);
            router
                .route(base, collection.clone())
                .route(&format!("{base}/"), collection)
                .route(&format!("{base}/{{id}}"), get(country::get_by_id))
        })
}
