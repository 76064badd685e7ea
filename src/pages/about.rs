//! About page: application blurb and aggregate user statistics.

use leptos::prelude::*;

use super::shell::{NavRoute, Shell};
use crate::services::stats;
use crate::store::{RoleCount, User, UserStore, role_counts};

const FEATURES: [&str; 5] = [
    "Server-rendered pages built from Leptos components",
    "Routing with Axum",
    "A single user store handed to every route through application state",
    "Snapshot publication over a tokio watch channel",
    "Rust's type system for the data model",
];

const TECH_STACK: [(&str, &str); 4] = [
    ("Web Server:", "Axum"),
    ("Rendering:", "Leptos (server-side)"),
    ("State Management:", "tokio watch channel"),
    ("Build Tool:", "Cargo"),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AboutView {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub role_count: usize,
    pub roles: Vec<RoleCount>,
    pub active_percentage: u32,
    pub most_common_role: String,
}

impl AboutView {
    /// Counts come from `users`; the role distribution from `roles`.
    #[must_use]
    pub fn new(users: &[User], roles: Vec<RoleCount>) -> Self {
        let most_common_role = stats::most_common_role(&roles).to_owned();
        Self {
            total: users.len(),
            active: stats::active_count(users),
            inactive: stats::inactive_count(users),
            role_count: stats::distinct_role_count(users),
            roles,
            active_percentage: stats::active_percentage_rounded(users),
            most_common_role,
        }
    }

    /// Build from one published snapshot, so counts and roles agree.
    #[must_use]
    pub fn from_store(store: &UserStore) -> Self {
        let users = store.snapshot();
        Self::new(&users, role_counts(&users))
    }
}

/// Render the about page as a full document.
#[must_use]
pub fn render(page: AboutView) -> String {
    let active = Some(NavRoute::About);
    view! {
        <Shell active=active>
            <AboutPage page=page/>
        </Shell>
    }
    .to_html()
}

#[component]
pub fn AboutPage(page: AboutView) -> impl IntoView {
    let AboutView { total, active, inactive, role_count, roles, active_percentage, most_common_role } = page;

    let features = FEATURES
        .into_iter()
        .map(|feature| view! { <li>{feature}</li> })
        .collect::<Vec<_>>();

    let tiles = [
        (total.to_string(), "Total Users"),
        (active.to_string(), "Active Users"),
        (inactive.to_string(), "Inactive Users"),
        (role_count.to_string(), "Different Roles"),
    ]
    .into_iter()
    .map(|(value, label)| {
        view! {
            <div class="stat-item">
                <h3>{value}</h3>
                <p>{label}</p>
            </div>
        }
    })
    .collect::<Vec<_>>();

    let role_items = roles
        .into_iter()
        .map(|role| {
            let name = format!("{}:", role.name);
            let count = format!("{} user(s)", role.count);
            view! {
                <div class="role-item">
                    <span class="role-name">{name}</span>
                    <span class="role-count">{count}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let tech_items = TECH_STACK
        .into_iter()
        .map(|(label, value)| {
            view! {
                <div class="tech-item">
                    <strong>{label}</strong>
                    " "
                    {value}
                </div>
            }
        })
        .collect::<Vec<_>>();

    let summary = format!("{active_percentage}% of users are active. Most common role: {most_common_role}.");

    view! {
        <div class="card">
            <h1>"About This Application"</h1>
            <p>
                "A small user directory that demonstrates routed pages over a shared, "
                "observable in-memory store."
            </p>
        </div>

        <div class="card">
            <h2>"Features"</h2>
            <ul>{features}</ul>
        </div>

        <div class="card">
            <h2>"User Statistics"</h2>
            <div class="stats-grid">{tiles}</div>
            <p>{summary}</p>
        </div>

        <div class="card">
            <h2>"User Distribution by Role"</h2>
            <div class="role-list">{role_items}</div>
        </div>

        <div class="card">
            <h2>"Technology Stack"</h2>
            <div class="tech-stack">{tech_items}</div>
        </div>
    }
}

#[cfg(test)]
#[path = "about_test.rs"]
mod tests;
