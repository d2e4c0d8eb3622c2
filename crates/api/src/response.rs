//! Shared response body types for API handlers.

use serde::Serialize;

/// Acknowledgement body for successful deletes: `{ "ok": true }`.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub ok: bool,
}

impl DeletedResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}
