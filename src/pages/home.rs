//! Home page: user list with refresh, active-only filter, and search.
//!
//! DESIGN
//! ======
//! `HomeState` is the page's subscription to the store. It keeps the last
//! snapshot it loaded, so the list reflects what the page saw at its last
//! refresh even if the store moved on. `HomeView` flattens that state plus
//! the request's filter and search options into plain render data.

use std::time::Duration;

use leptos::prelude::*;
use tokio::sync::watch;
use tracing::debug;

use super::shell::{NavRoute, Shell};
use crate::services::stats;
use crate::store::{Snapshot, User, UserStore};

// =============================================================================
// STATE
// =============================================================================

#[derive(Clone, Debug)]
pub struct HomeState {
    rx: watch::Receiver<Snapshot>,
    pub users: Snapshot,
    pub loading: bool,
    pub show_active_only: bool,
}

impl HomeState {
    /// Subscribe to `store` and load its current snapshot.
    #[must_use]
    pub fn subscribe(store: &UserStore) -> Self {
        let mut rx = store.subscribe();
        let users = rx.borrow_and_update().clone();
        Self { rx, users, loading: false, show_active_only: false }
    }

    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }

    /// Take the newest published snapshot and clear the loading flag.
    pub fn finish_refresh(&mut self) {
        self.users = self.rx.borrow_and_update().clone();
        self.loading = false;
    }

    /// Reload after a simulated delay. Purely cosmetic latency.
    pub async fn refresh(&mut self, delay: Duration) {
        self.begin_refresh();
        debug!(delay_ms = delay.as_millis(), "home refresh started");
        tokio::time::sleep(delay).await;
        self.finish_refresh();
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        stats::active_count(&self.users)
    }

    #[must_use]
    pub fn active_percentage(&self) -> f64 {
        stats::active_percentage(&self.users)
    }
}

// =============================================================================
// VIEW MODEL
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct HomeView {
    pub total: usize,
    pub active: usize,
    pub active_percentage: f64,
    pub loading: bool,
    /// Main list: the loaded snapshot, or search results when `query` is set.
    pub listed: Vec<User>,
    pub show_active_only: bool,
    /// Filled only when `show_active_only` is on.
    pub active_users: Vec<User>,
    pub query: Option<String>,
}

impl HomeView {
    /// Build render data. The active-only list and search results are read
    /// from the store directly; counts come from the loaded snapshot.
    #[must_use]
    pub fn build(state: &HomeState, store: &UserStore, query: Option<&str>) -> Self {
        let query = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_owned);
        let listed = match &query {
            Some(q) => store.search(q),
            None => state.users.to_vec(),
        };
        let active_users = if state.show_active_only { store.active() } else { Vec::new() };

        Self {
            total: state.users.len(),
            active: state.active_count(),
            active_percentage: state.active_percentage(),
            loading: state.loading,
            listed,
            show_active_only: state.show_active_only,
            active_users,
            query,
        }
    }
}

// =============================================================================
// COMPONENTS
// =============================================================================

/// Render the home page as a full document.
#[must_use]
pub fn render(page: HomeView) -> String {
    let active = Some(NavRoute::Home);
    view! {
        <Shell active=active>
            <HomePage page=page/>
        </Shell>
    }
    .to_html()
}

#[component]
pub fn HomePage(page: HomeView) -> impl IntoView {
    let HomeView { total, active, active_percentage, loading, listed, show_active_only, active_users, query } = page;

    let active_only_value = if show_active_only { "true" } else { "false" };
    let toggle_value = if show_active_only { "false" } else { "true" };
    let toggle_label = if show_active_only { "Show All Users" } else { "Show Active Users Only" };
    let refresh_label = if loading { "Loading..." } else { "Refresh Users" };
    let query_value = query.clone().unwrap_or_default();
    let active_share = format!("{active_percentage:.1}%");

    let user_list = (!loading && !listed.is_empty()).then(|| {
        let items = listed
            .into_iter()
            .map(|user| view! { <UserItem user=user/> })
            .collect::<Vec<_>>();
        view! { <ul class="user-list">{items}</ul> }
    });

    let no_matches = (!loading && query.is_some() && user_list.is_none()).then(|| {
        view! { <p class="loading">"No users match your search."</p> }
    });

    let loading_note = loading.then(|| view! { <div class="loading">"Loading users..."</div> });

    let active_list = show_active_only.then(|| {
        let items = active_users
            .into_iter()
            .map(|user| {
                view! {
                    <li class="user-item">
                        <strong>{user.name}</strong>
                        " - "
                        {user.role}
                    </li>
                }
            })
            .collect::<Vec<_>>();
        view! { <ul class="user-list">{items}</ul> }
    });

    view! {
        <div class="card">
            <h1>"Welcome to Userboard"</h1>
            <p>"This is the home page featuring a dynamic user list."</p>
        </div>

        <div class="card">
            <h2>"User Management Dashboard"</h2>
            <div class="stats">
                <p>
                    <strong>"Total Users:"</strong>
                    " "
                    {total.to_string()}
                </p>
                <p>
                    <strong>"Active Users:"</strong>
                    " "
                    {active.to_string()}
                </p>
                <p>
                    <strong>"Active Share:"</strong>
                    " "
                    {active_share}
                </p>
            </div>

            <form class="inline" method="post" action="/home/refresh">
                <input type="hidden" name="active_only" value=active_only_value/>
                <button type="submit" disabled=loading>
                    {refresh_label}
                </button>
            </form>

            <form class="inline" method="get" action="/home">
                <input type="hidden" name="active_only" value=active_only_value/>
                <input type="search" name="q" value=query_value placeholder="Search by name or email"/>
                <button type="submit">"Search"</button>
            </form>

            {user_list}
            {no_matches}
            {loading_note}
        </div>

        <div class="card">
            <h2>"Quick Actions"</h2>
            <form method="get" action="/home">
                <input type="hidden" name="active_only" value=toggle_value/>
                <button type="submit">{toggle_label}</button>
            </form>
            {active_list}
        </div>
    }
}

#[component]
fn UserItem(user: User) -> impl IntoView {
    let (badge_class, badge_label) =
        if user.is_active { ("badge active", "Active") } else { ("badge inactive", "Inactive") };
    let toggle_action = format!("/users/{}/toggle", user.id);

    view! {
        <li class="user-item">
            <strong>{user.name}</strong>
            " - "
            {user.email}
            <span class=badge_class>{badge_label}</span>
            <br/>
            <small>"Role: " {user.role}</small>
            <form class="inline" method="post" action=toggle_action>
                <button type="submit">"Toggle status"</button>
            </form>
        </li>
    }
}

#[cfg(test)]
#[path = "home_test.rs"]
mod tests;
