//! Application state
//!
//! Immutable configuration plus handles to the backing services.

pub mod app_state;

pub use app_state::AppState;
