use axum::Json;
use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::{Deserialize, Serialize};
use url::Url;
use web_analyser_core::{AnalyserError, Summary, is_valid_url};

use crate::middleware::RequestLogId;
use crate::routes::AppState;
use crate::templates::{self, ErrorPage};

/// Body of `POST /summary` and query of `GET /api/summary`.
#[derive(Debug, Deserialize)]
pub struct UrlParams {
    #[serde(default)]
    pub url: String,
}

/// JSON error body of the API.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: &'static str,
    /// Status returned by the analysed site, if it answered at all.
    pub status: Option<u16>,
}

/// Why a URL could not be summarised.
enum Failure {
    InvalidUrl,
    Unreachable(AnalyserError),
}

impl Failure {
    fn page(&self) -> ErrorPage {
        match self {
            Failure::InvalidUrl => ErrorPage::invalid_url(),
            Failure::Unreachable(err) => ErrorPage::unreachable(err.status_code()),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Failure::InvalidUrl => StatusCode::BAD_REQUEST,
            Failure::Unreachable(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Validates `raw`, fetches the page and analyses it, logging failures
/// against the request id.
async fn summarise(state: &AppState, request_id: &str, raw: &str) -> Result<Summary, Failure> {
    let raw = raw.trim();

    if !is_valid_url(raw) {
        tracing::error!(request_id, url = raw, "invalid URL");
        return Err(Failure::InvalidUrl);
    }
    let url = Url::parse(raw).map_err(|e| {
        tracing::error!(request_id, url = raw, error = %e, "invalid URL");
        Failure::InvalidUrl
    })?;

    state.analyser.analyse(&url).await.map_err(|err| {
        tracing::error!(
            request_id,
            url = raw,
            error = %err,
            upstream_status = err.status_code(),
            "{}",
            templates::UNREACHABLE_URL_MESSAGE
        );
        Failure::Unreachable(err)
    })
}

pub async fn healthy() -> &'static str {
    "OK!"
}

pub async fn index() -> Html<String> {
    Html(templates::index_page())
}

/// `GET /summary` has nothing to show; send the user back to the form.
pub async fn summary_redirect() -> Redirect {
    Redirect::to("/")
}

pub async fn summary(
    State(state): State<AppState>, RequestLogId(request_id): RequestLogId, Form(params): Form<UrlParams>,
) -> Response {
    match summarise(&state, &request_id, &params.url).await {
        Ok(summary) => {
            tracing::info!(
                request_id = %request_id,
                url = %summary.source_url(),
                links = summary.link_count(),
                "summary rendered"
            );
            Html(templates::summary_page(&summary)).into_response()
        }
        Err(failure) => {
            (failure.status(), Html(templates::error_page(&failure.page(), &params.url))).into_response()
        }
    }
}

pub async fn api_summary(
    State(state): State<AppState>, RequestLogId(request_id): RequestLogId, Query(params): Query<UrlParams>,
) -> Response {
    match summarise(&state, &request_id, &params.url).await {
        Ok(summary) => Json(summary).into_response(),
        Err(failure) => {
            let page = failure.page();
            let body = ApiError { error: page.message, status: page.upstream_status };
            (failure.status(), Json(body)).into_response()
        }
    }
}
