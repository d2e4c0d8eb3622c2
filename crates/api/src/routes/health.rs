use axum::extract::State;
use axum::{routing::get, Json, Router};
use roster_db::PoolStatus;
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
///
/// `status` is `"degraded"` whenever `SELECT 1` fails. The endpoint itself
/// always answers 200 so load balancers can read the payload.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    pub pool_size: u32,
    pub idle_connections: usize,
}

impl HealthReport {
    fn new(db_healthy: bool, pool: PoolStatus) -> Self {
        Self {
            status: if db_healthy { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            pool_size: pool.size,
            idle_connections: pool.idle,
        }
    }
}

async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    let db_healthy = match state.db.health_check().await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Database health check failed");
            false
        }
    };

    Json(HealthReport::new(db_healthy, state.db.pool_status()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
