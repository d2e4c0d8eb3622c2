use roster_db::Database;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: [`Database`] wraps a reference-counted pool.
#[derive(Clone)]
pub struct AppState {
    /// Storage client. Handlers call [`Database::acquire`] once per request.
    pub db: Database,
}
