//! Page routes and the form actions posted from them.

use axum::Form;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, Redirect};
use serde::Deserialize;
use tracing::info;

use crate::pages::about::{self, AboutView};
use crate::pages::home::{self, HomeState, HomeView};
use crate::pages::shell::NavRoute;
use crate::state::AppState;

/// Options carried by the home page's links and forms.
#[derive(Debug, Default, Deserialize)]
pub struct HomeParams {
    #[serde(default)]
    pub active_only: bool,
    pub q: Option<String>,
}

fn home_view(state: &AppState, page: &HomeState, params: &HomeParams) -> Html<String> {
    let view = HomeView::build(page, &state.store, params.q.as_deref());
    Html(home::render(view))
}

/// `GET /home`: user list, optionally filtered to active users or searched.
pub async fn show_home(State(state): State<AppState>, Query(params): Query<HomeParams>) -> Html<String> {
    let mut page = HomeState::subscribe(&state.store);
    page.show_active_only = params.active_only;
    home_view(&state, &page, &params)
}

/// `POST /home/refresh`: reload the list after the configured delay.
pub async fn refresh_home(State(state): State<AppState>, Form(params): Form<HomeParams>) -> Html<String> {
    let mut page = HomeState::subscribe(&state.store);
    page.show_active_only = params.active_only;
    page.refresh(state.config.refresh_delay).await;
    home_view(&state, &page, &params)
}

/// `GET /about`: aggregate statistics.
pub async fn show_about(State(state): State<AppState>) -> Html<String> {
    Html(about::render(AboutView::from_store(&state.store)))
}

/// `POST /users/:id/toggle`: flip a user's active flag, then back to home.
pub async fn toggle_user(State(state): State<AppState>, Path(id): Path<u32>) -> Result<Redirect, StatusCode> {
    let user = state
        .store
        .toggle_status(id)
        .ok_or(StatusCode::NOT_FOUND)?;
    info!(id = user.id, is_active = user.is_active, "user status toggled");
    Ok(Redirect::to(NavRoute::Home.path()))
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
