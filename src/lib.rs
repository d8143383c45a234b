pub mod config;
pub mod error;

// Record normalization
pub mod catalog;
pub mod resolve;

// Upstream pizza API
pub mod client;

// HTTP surface
pub mod api;
pub mod web;

pub mod cli;

// Utilities
pub mod utils;

// Re-exports
pub use config::Settings;
pub use error::{Error, Result};
