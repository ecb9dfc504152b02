//! Centralized icon definitions.
//!
//! File icons are chosen by name from `privafile_core::mime::file_icon`,
//! so the classification rules live in one place.

use icondata::Icon;
use privafile_core::View;
use privafile_core::mime::file_icon;

pub use icondata::{
    LuDownload as DOWNLOAD, LuLogOut as LOGOUT, LuMenu as MENU, LuRefreshCw as REFRESH,
    LuTrash2 as DELETE, LuX as CLOSE,
};

/// Icon for a file, by MIME type.
pub fn for_mime(mime: &str) -> Icon {
    match file_icon(mime) {
        "Image" => icondata::LuImage,
        "Film" => icondata::LuFilm,
        "Music" => icondata::LuMusic,
        "FileText" => icondata::LuFileText,
        _ => icondata::LuFile,
    }
}

/// Icon for a sidebar entry.
pub fn for_view(view: View) -> Icon {
    match view {
        View::Files => icondata::LuFolder,
        View::Upload => icondata::LuUpload,
        View::Stats => icondata::LuLayoutGrid,
        View::Settings => icondata::LuSettings,
    }
}
