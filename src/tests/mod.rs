// Shared test utilities
pub mod common;
mod initial_theme;
