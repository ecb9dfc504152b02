//! Data models for the client.
//!
//! - [`FileRecord`], [`FileCategory`] - files known to the server
//! - [`Session`] - credential and server endpoint in use
//! - [`UiState`], [`View`] - transient UI flags
//! - [`FileStats`] - per-category counts derived from the file list
//! - [`AppState`] - the full snapshot observed by the UI

mod file;
mod session;
mod state;
mod stats;
mod ui;

pub use file::{FileCategory, FileRecord};
pub use session::Session;
pub use state::AppState;
pub use stats::FileStats;
pub use ui::{UiState, View};
