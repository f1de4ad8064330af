// State management module
// Holds the upstream clients shared by every request

pub mod app_state;

pub use app_state::AppState;
