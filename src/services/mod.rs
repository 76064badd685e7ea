//! Domain services used by the page routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules hold logic that sits on top of the user store so route
//! handlers and page components can stay focused on rendering.

pub mod snapshot;
pub mod stats;
