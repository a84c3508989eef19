use axum::Json;
use serde_json::{Value, json};

/// Health check handler
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Root status handler for the gateway surface
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "status": "Concierge AI gateway is running" }))
}
