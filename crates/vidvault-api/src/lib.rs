//! Vidvault API Library
//!
//! This crate provides the upload and listing workflows, their HTTP handlers, and
//! application setup.

mod handlers;

pub mod error;
pub mod services;
pub mod setup;
pub mod state;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;
