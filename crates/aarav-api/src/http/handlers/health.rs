//! GET /api/health -- liveness check.

use axum::Json;
use serde_json::{json, Value};

/// GET /api/health -- report that the server is up.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "Aarav server is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
