#![recursion_limit = "512"]

pub mod api;
pub mod app;
pub mod components;
pub mod models;
pub mod pages;

// Re-export for convenience
pub use app::App;
