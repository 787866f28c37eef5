/*!
 * HTTP surface for the lookup service.
 *
 * Builds the axum router, applies the CORS policy and binds the listener.
 * Handlers live in `routes`.
 */

use axum::Router;
use axum::http::{Method, header};
use axum::routing::{delete, get, post};
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::lookup::LookupService;

pub mod routes;

/// Shared server state
pub struct AppState {
    /// The lookup service handling all requests
    pub service: LookupService,
}

/// Any localhost port is an acceptable origin for local development
static LOCALHOST_ORIGIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^http://localhost:\d+$").unwrap());

/// CORS layer allowing the configured origins plus any localhost port
pub fn cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            origin.to_str().is_ok_and(|origin| {
                allowed_origins.iter().any(|allowed| allowed == origin)
                    || LOCALHOST_ORIGIN.is_match(origin)
            })
        }))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Build the application router
pub fn build_router(state: Arc<AppState>, allowed_origins: Vec<String>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/test", get(routes::test))
        .route("/translate", post(routes::translate))
        .route("/delete/{id}", delete(routes::delete_translation))
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

/// Bind the listener and serve requests until shutdown
pub async fn start_server(
    port: u16,
    state: Arc<AppState>,
    allowed_origins: Vec<String>,
) -> anyhow::Result<()> {
    let app = build_router(state, allowed_origins);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Backend listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
