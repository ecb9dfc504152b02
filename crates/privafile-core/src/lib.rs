//! Core of the privafile web client.
//!
//! This crate is target-independent: it talks HTTP through the
//! [`Transport`](api::Transport) trait and persists the session through
//! [`SessionStorage`](storage::SessionStorage), so everything here runs
//! in host tests. The browser crate supplies Fetch and `localStorage`
//! implementations.
//!
//! - [`api`] - authenticated API client and success contract
//! - [`store`] - application state container and actions
//! - [`models`] - files, session, UI state, statistics
//! - [`mime`], [`format`] - display helpers

pub mod api;
pub mod config;
pub mod error;
pub mod format;
pub mod mime;
pub mod models;
pub mod storage;
pub mod store;
#[cfg(any(test, feature = "mock"))]
pub mod testing;

pub use api::{DriveApi, Transport, UploadPayload};
pub use error::{RequestError, StorageError, TransportError};
pub use models::{AppState, FileCategory, FileRecord, FileStats, Session, UiState, View};
pub use storage::{MemoryStorage, SessionStorage};
pub use store::{DriveStore, SubscriptionId};
