use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderName, StatusCode};
use axum::routing::get;
use axum::{Router, middleware};
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;

use crate::analyser::PageAnalyser;
use crate::handlers;
use crate::middleware::{REQUEST_ID_HEADER, request_log};

#[derive(Clone)]
pub struct AppState {
    pub analyser: Arc<dyn PageAnalyser>,
}

impl AppState {
    pub fn new(analyser: impl PageAnalyser + 'static) -> Self {
        Self { analyser: Arc::new(analyser) }
    }
}

pub fn router(state: AppState, timeout: Duration) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .route("/", get(handlers::index))
        .route("/healthy", get(handlers::healthy))
        .route("/summary", get(handlers::summary_redirect).post(handlers::summary))
        .route("/api/summary", get(handlers::api_summary))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(PropagateRequestIdLayer::new(request_id))
                .layer(middleware::from_fn(request_log))
                .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)),
        )
}
