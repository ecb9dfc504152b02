//! UI components built with Leptos.
//!
//! - [`Login`] - server URL and token form
//! - [`Shell`] - authenticated layout (sidebar + current view)
//! - [`icons`] - icon mapping for file types and navigation

mod file_list;
pub mod icons;
mod login;
mod preview;
mod settings;
mod shell;
mod sidebar;
mod stats;
mod upload;

pub use file_list::FileList;
pub use login::Login;
pub use preview::Preview;
pub use settings::SettingsPanel;
pub use shell::Shell;
pub use sidebar::Sidebar;
pub use stats::StatsPanel;
pub use upload::UploadZone;
