//! Root layout: document head, navigation links, and the content slot.

use leptos::prelude::*;

pub const APP_TITLE: &str = "Userboard";
pub const STYLESHEET_PATH: &str = "/styles.css";

/// Stylesheet served at `STYLESHEET_PATH`.
pub const STYLESHEET: &str = r"
body { font-family: sans-serif; margin: 0; background-color: #fafafa; color: #333; }
nav { background-color: #1976d2; padding: 0 16px; }
nav ul { list-style: none; margin: 0; padding: 0; display: flex; gap: 16px; }
nav a { display: inline-block; padding: 16px 8px; color: #e3f2fd; text-decoration: none; }
nav a.active { color: #fff; font-weight: 600; border-bottom: 3px solid #fff; }
.container { max-width: 960px; margin: 24px auto; padding: 0 16px; }
.card { background-color: #fff; border-radius: 8px; padding: 20px; margin-bottom: 20px; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.12); }
.stats { margin: 16px 0; padding: 16px; background-color: #f5f5f5; border-radius: 4px; }
.stats p { margin: 8px 0; }
button { margin-right: 10px; margin-bottom: 16px; }
form.inline { display: inline; }
.user-list { list-style: none; padding: 0; }
.user-item { padding: 12px 0; border-bottom: 1px solid #eee; }
.badge { margin-left: 8px; padding: 2px 8px; border-radius: 12px; font-size: 12px; }
.badge.active { background-color: #e8f5e9; color: #2e7d32; }
.badge.inactive { background-color: #ffebee; color: #c62828; }
.loading { padding: 16px; color: #666; }
.stats-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(150px, 1fr)); gap: 16px; margin: 20px 0; }
.stat-item { background-color: #e3f2fd; padding: 20px; border-radius: 8px; text-align: center; border: 2px solid #1976d2; }
.stat-item h3 { font-size: 32px; color: #1976d2; margin: 0 0 8px 0; }
.stat-item p { margin: 0; color: #666; font-size: 14px; }
.role-list, .tech-stack { display: flex; flex-direction: column; gap: 12px; }
.role-item { display: flex; justify-content: space-between; padding: 12px 16px; background-color: #f5f5f5; border-radius: 4px; border-left: 4px solid #1976d2; }
.role-name { font-weight: 600; }
.role-count { color: #666; }
.tech-item { padding: 12px; background-color: #f9f9f9; border-radius: 4px; }
";

/// Routes reachable from the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavRoute {
    Home,
    About,
}

impl NavRoute {
    pub const ALL: [Self; 2] = [Self::Home, Self::About];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/home",
            Self::About => "/about",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
        }
    }
}

/// Full HTML document with the navigation bar. The link for `active` is
/// highlighted; `None` highlights nothing.
#[component]
pub fn Shell(active: Option<NavRoute>, children: Children) -> impl IntoView {
    let links = NavRoute::ALL
        .into_iter()
        .map(|route| {
            let href = route.path();
            let label = route.label();
            let class = if active == Some(route) { "active" } else { "" };
            view! {
                <li>
                    <a href=href class=class>
                        {label}
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{APP_TITLE}</title>
                <link rel="stylesheet" href=STYLESHEET_PATH/>
            </head>
            <body>
                <nav>
                    <ul>{links}</ul>
                </nav>
                <div class="container">{children()}</div>
            </body>
        </html>
    }
}
