//! # userboard
//!
//! A small user directory served as two routed pages (home and about) over
//! an in-memory user store that publishes a snapshot after every change.
//!
//! The store lives in [`store`]; pages are Leptos components in [`pages`],
//! wired to Axum in [`routes`].

pub mod config;
pub mod error;
pub mod pages;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
