use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::get,
};
use tower_http::cors::CorsLayer;

use super::AppState;
use super::handlers::{jobs, orders};

fn build_localhost_cors(api_port: u16) -> CorsLayer {
    let origins: Vec<HeaderValue> = [
        format!("http://127.0.0.1:{}", api_port),
        format!("http://localhost:{}", api_port),
    ]
    .iter()
    .filter_map(|o| o.parse().ok())
    .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
}

pub fn build_api_router(state: AppState) -> Router {
    let cors = build_localhost_cors(state.config.api_port);

    Router::new()
        .route("/api/jobs", get(jobs::get_jobs_endpoint))
        .route("/api/jobs/clear-cart", get(jobs::clear_cart_job_endpoint))
        .route("/api/jobs/place-orders", get(jobs::place_orders_job_endpoint))
        .route(
            "/api/jobs/update-order-status",
            get(jobs::update_order_status_job_endpoint),
        )
        .route("/api/jobs/{id}/logs", get(jobs::get_job_logs_endpoint))
        .route("/api/orders", get(orders::get_orders_endpoint))
        .layer(cors)
        .with_state(state)
}
