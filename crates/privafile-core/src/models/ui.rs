use super::FileRecord;

/// Main content view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    /// File list (default)
    #[default]
    Files,
    /// Upload drop zone
    Upload,
    /// Per-category statistics
    Stats,
    /// Connection settings
    Settings,
}

impl View {
    pub const ALL: [View; 4] = [View::Files, View::Upload, View::Stats, View::Settings];

    pub fn label(self) -> &'static str {
        match self {
            View::Files => "Files",
            View::Upload => "Upload",
            View::Stats => "Statistics",
            View::Settings => "Settings",
        }
    }
}

/// Transient UI flags. Never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub sidebar_open: bool,
    pub current_view: View,
    pub is_dragging: bool,
    pub global_dragging: bool,
    pub selected_file: Option<FileRecord>,
    pub upload_message: String,
    pub upload_success: bool,
    pub uploading: bool,
    pub loading: bool,
    pub error: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            current_view: View::Files,
            is_dragging: false,
            global_dragging: false,
            selected_file: None,
            upload_message: String::new(),
            upload_success: false,
            uploading: false,
            loading: false,
            error: String::new(),
        }
    }
}
