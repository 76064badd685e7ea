//! Server-rendered pages.
//!
//! DESIGN
//! ======
//! Pages are Leptos components rendered to a complete HTML document with
//! `RenderHtml::to_html`. Each page module exposes a plain view model
//! (built from the user store) and a `render` function the routes call.
//! There is no hydration: actions are plain HTML forms handled by routes.

pub mod about;
pub mod home;
pub mod shell;

use leptos::prelude::*;

use shell::{NavRoute, Shell};

/// Render the fallback page for unknown paths.
#[must_use]
pub fn render_not_found() -> String {
    let active: Option<NavRoute> = None;
    let home_path = NavRoute::Home.path();
    view! {
        <Shell active=active>
            <div class="card">
                <h1>"Page not found."</h1>
                <p>
                    <a href=home_path>"Back to the home page"</a>
                </p>
            </div>
        </Shell>
    }
    .to_html()
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
