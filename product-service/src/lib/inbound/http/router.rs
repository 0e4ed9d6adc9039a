use std::sync::Arc;
use std::time::Duration;

use auth::TokenVerifier;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_product;
use super::handlers::delete_product;
use super::handlers::get_product;
use super::handlers::list_products;
use super::handlers::service_info;
use super::handlers::update_product;
use super::middleware::authenticate as auth_middleware;
use crate::domain::product::service::ProductService;
use crate::outbound::repositories::product::SqliteProductRepository;

#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<ProductService<SqliteProductRepository>>,
    pub token_verifier: Arc<TokenVerifier>,
}

pub fn create_router(
    product_service: Arc<ProductService<SqliteProductRepository>>,
    token_verifier: Arc<TokenVerifier>,
) -> Router {
    let state = AppState {
        product_service,
        token_verifier,
    };

    let public_routes = Router::new().route("/", get(service_info));

    let protected_routes = Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route(
            "/api/products/:product_id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Request headers are left out of the span: they carry credentials.
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
