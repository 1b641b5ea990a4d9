//! Extracurricular activities for Mergington High School.
//!
//! The server side (`web`, `services`, `database`) serves the activity
//! catalog and signup commands over HTTP and renders the board page. The
//! client side (`client`, `page`) drives the signup page against that API.

pub mod client;
pub mod config;
pub mod database;
pub mod models;
pub mod page;
pub mod services;
pub mod web;

/// `RUST_LOG` when set, `default_filter` otherwise.
pub fn init_tracing(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
