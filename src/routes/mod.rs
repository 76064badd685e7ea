//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the page routes, the page actions (plain HTML form posts), the
//! stylesheet, and a health check under a single Axum router. `/` redirects
//! to the home page; unknown paths render the not-found page.

pub mod pages;

use axum::Router;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect};
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::pages::shell::{NavRoute, STYLESHEET, STYLESHEET_PATH};
use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(redirect_root))
        .route("/home", get(pages::show_home))
        .route("/home/refresh", post(pages::refresh_home))
        .route("/about", get(pages::show_about))
        .route("/users/{id}/toggle", post(pages::toggle_user))
        .route(STYLESHEET_PATH, get(stylesheet))
        .route("/healthz", get(healthz))
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn redirect_root() -> Redirect {
    Redirect::temporary(NavRoute::Home.path())
}

async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(crate::pages::render_not_found()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
