//! Browser glue for the core client.
//!
//! Provides:
//! - [`FetchTransport`] - HTTP over the Fetch API
//! - [`BrowserStorage`] - session persistence in `localStorage`
//! - [`read_file`] - turn a picked `File` into an upload payload
//! - [`logging`] - tracing output to the browser console

pub mod dom;
mod fetch;
pub mod logging;
mod storage;
mod upload;

pub use fetch::FetchTransport;
pub use storage::BrowserStorage;
pub use upload::read_file;
