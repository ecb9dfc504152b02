use super::{FileRecord, FileStats, Session, UiState};

/// Complete client state as observed by the UI.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub session: Session,
    pub files: Vec<FileRecord>,
    pub ui: UiState,
}

impl AppState {
    /// Category counts for the current file list.
    pub fn file_stats(&self) -> FileStats {
        FileStats::from_files(&self.files)
    }
}
