use super::{FileCategory, FileRecord};

/// File counts per category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FileStats {
    pub total: usize,
    pub images: usize,
    pub videos: usize,
    pub audio: usize,
    pub documents: usize,
    pub other: usize,
}

impl FileStats {
    pub fn from_files(files: &[FileRecord]) -> Self {
        files.iter().fold(Self::default(), |mut stats, file| {
            stats.total += 1;
            match file.category() {
                FileCategory::Image => stats.images += 1,
                FileCategory::Video => stats.videos += 1,
                FileCategory::Audio => stats.audio += 1,
                FileCategory::Document => stats.documents += 1,
                FileCategory::Other => stats.other += 1,
            }
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_from_files() {
        let files = vec![
            FileRecord::new("1", "image/png"),
            FileRecord::new("2", "image/jpeg"),
            FileRecord::new("3", "video/mp4"),
            FileRecord::new("4", "application/pdf"),
            FileRecord::new("5", "text/plain"),
        ];
        let stats = FileStats::from_files(&files);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.images, 2);
        assert_eq!(stats.videos, 1);
        assert_eq!(stats.audio, 0);
        assert_eq!(stats.documents, 1);
        assert_eq!(stats.other, 1);
    }

    #[test]
    fn test_stats_empty() {
        assert_eq!(FileStats::from_files(&[]), FileStats::default());
    }
}
