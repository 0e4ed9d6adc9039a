use std::sync::Arc;
use std::time::Duration;

use auth::TokenVerifier;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::add_stock;
use super::handlers::adjust_stock;
use super::handlers::get_stock;
use super::handlers::service_info;
use super::middleware::authenticate as auth_middleware;
use crate::domain::inventory::service::InventoryService;
use crate::outbound::repositories::inventory::SqliteInventoryRepository;

#[derive(Clone)]
pub struct AppState {
    pub inventory_service: Arc<InventoryService<SqliteInventoryRepository>>,
    pub token_verifier: Arc<TokenVerifier>,
}

pub fn create_router(
    inventory_service: Arc<InventoryService<SqliteInventoryRepository>>,
    token_verifier: Arc<TokenVerifier>,
) -> Router {
    let state = AppState {
        inventory_service,
        token_verifier,
    };

    let public_routes = Router::new().route("/", get(service_info));

    let protected_routes = Router::new()
        .route("/api/inventory", post(add_stock))
        .route("/api/inventory/:product_id", get(get_stock))
        .route("/api/inventory/adjust/:product_id", post(adjust_stock))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // No headers in the span: Authorization must stay out of the logs.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
