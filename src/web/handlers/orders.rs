use axum::{Json, extract::State};

use super::super::AppState;

pub async fn get_orders_endpoint(State(state): State<AppState>) -> Json<serde_json::Value> {
    match state.storage.get_all_orders().await {
        Ok(orders) => Json(serde_json::json!({ "success": true, "orders": orders })),
        Err(e) => Json(serde_json::json!({ "success": false, "error": e.to_string() })),
    }
}
