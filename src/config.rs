//! Application configuration.
//!
//! Centralizes the constants of the browser application. Server endpoints,
//! storage keys and other client-protocol values live in
//! `privafile_core::config`.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the sidebar and login screen.
pub const APP_NAME: &str = "privafile";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Id of the element the app mounts into.
pub const MOUNT_ELEMENT_ID: &str = "app";

// =============================================================================
// Logging
// =============================================================================

/// Tracing filter directive for the console subscriber.
pub const LOG_LEVEL: &str = "info,privafile_core=debug";
