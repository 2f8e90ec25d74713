//! API Routes
//!
//! Route definitions, handlers and the middleware stack.
//!
//! ## Middleware (outermost first)
//! ```text
//! request ──► SetRequestId ──► Trace ──► PropagateRequestId
//!                                            │
//!             CatchPanic ◄───────────────────┘
//!                 │
//!                 ▼
//!             Timeout ──► Router ──► handler
//! ```

use std::any::Any;
use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::extract::{Path, State};
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{error, Level};

use crate::error::{ApiError, ApiResult};
use crate::responses::{PointsResponse, ProcessResponse};
use crate::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the full application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    let request_timeout = state.config.request_timeout();

    Router::new()
        .route("/health", get(health_check))
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(get_points))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(request_span)
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(TimeoutLayer::new(request_timeout)),
        )
}

/// Span for one HTTP request, tagged with its request id.
fn request_span(request: &Request<Body>) -> tracing::Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

/// Turns a handler panic into a JSON 500.
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!(panic = %detail, "Handler panicked");
    ApiError::Internal(detail).into_response()
}

// =============================================================================
// Handlers
// =============================================================================

async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.health.check().await)
}

/// The body is taken as raw bytes so that decode failures get the API's own
/// error body instead of axum's rejection text.
async fn process_receipt(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<ProcessResponse>> {
    let id = state.receipts.process_receipt(&body).await?;
    Ok(Json(ProcessResponse {
        id: id.into_string(),
    }))
}

async fn get_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let points = state.receipts.get_points(&id).await?;
    Ok(Json(PointsResponse { points }))
}
