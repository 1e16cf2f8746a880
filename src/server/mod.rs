//! HTTP endpoint serving aggregated P2P rates.
//!
//! Uses `axum` with a permissive CORS layer, so browser front-ends can call it directly.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::aggregator::{ErrorResponse, RateAggregator, RatesRequest, RatesResponse};
use crate::common::{RateScannerError, get_timestamp_millis};

/// Shared state of the HTTP server.
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<RateAggregator>,
}

impl AppState {
    pub fn new(aggregator: RateAggregator) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
        }
    }
}

/// Routes:
/// - `POST /fetch-p2p-rates` (also under `/functions/v1/`)
/// - `GET /health`
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/fetch-p2p-rates", post(fetch_rates_handler))
        .route("/functions/v1/fetch-p2p-rates", post(fetch_rates_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the HTTP server.
///
/// Blocks until Ctrl-C.
pub async fn start_server(state: AppState, addr: SocketAddr) -> Result<(), RateScannerError> {
    let app = router(state);

    info!(address = %addr, "Starting P2P rates server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await?;

    Ok(())
}

/// GET /health
async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": get_timestamp_millis(),
    }))
}

/// POST /fetch-p2p-rates
///
/// The body is parsed by hand so a malformed request gets the same
/// `500 {"error": ...}` shape as any other failure.
async fn fetch_rates_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let request: RatesRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            error!(error = %e, "invalid rates request");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    let rates = state.aggregator.fetch_rates(&request).await;
    info!(returned = rates.len(), requested = request.exchanges.len(), "rates request served");

    (StatusCode::OK, Json(RatesResponse { rates })).into_response()
}
