//! Page handlers
//!
//! Server-rendered HTML pages.

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Response},
};

use crate::error::AppError;
use crate::pages::{render_about, render_error, render_home, render_privacy};
use crate::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

fn request_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
}

/// GET /
///
/// Home page listing the first few products.
pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let products = match state.catalog() {
        Ok(catalog) => catalog.get_home_page_products().await,
        Err(e) => Err(e),
    };

    match products {
        Ok(products) => Html(render_home(&products)).into_response(),
        Err(e) => {
            let err = AppError::from(e);
            tracing::error!("Failed to load home page: {}", err);
            (
                err.status_code(),
                [(header::CACHE_CONTROL, "no-store")],
                Html(render_error(request_id(&headers))),
            )
                .into_response()
        }
    }
}

/// GET /privacy
pub async fn privacy() -> Html<String> {
    Html(render_privacy())
}

/// GET /about
pub async fn about(State(state): State<AppState>) -> Html<String> {
    Html(render_about(&state.config.environment))
}

/// GET /error
///
/// Error page showing the request correlation id. Never cached.
pub async fn error(headers: HeaderMap) -> Response {
    (
        [(header::CACHE_CONTROL, "no-store")],
        Html(render_error(request_id(&headers))),
    )
        .into_response()
}
