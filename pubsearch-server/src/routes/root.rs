use axum::Json;
use serde_json::{Value, json};

pub const SERVICE_NAME: &str = "Publication Search API";
pub const API_VERSION: &str = "1.0";

/// `GET /`
pub async fn index() -> Json<Value> {
    Json(json!({ "message": SERVICE_NAME, "version": API_VERSION }))
}
