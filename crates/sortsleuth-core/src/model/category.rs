//! The closed set of file categories and their destination folders.

/// Broad file type categories used for reorganisation.
///
/// Each category owns exactly one destination folder directly under the
/// root. Those six folder names are reserved: the scanner never descends
/// into them, so already-sorted files are never reclassified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Image,
    Document,
    Video,
    Audio,
    Archive,
    Unknown,
}

impl Category {
    /// Every category, in bucket-index order.
    pub const ALL: [Category; 6] = [
        Self::Image,
        Self::Document,
        Self::Video,
        Self::Audio,
        Self::Archive,
        Self::Unknown,
    ];

    /// Relocation order for plain moves. Archives are handled separately,
    /// after every other bucket.
    pub const MOVABLE: [Category; 5] = [
        Self::Image,
        Self::Document,
        Self::Video,
        Self::Audio,
        Self::Unknown,
    ];

    /// Destination folder name under the root.
    pub fn folder_name(self) -> &'static str {
        match self {
            Self::Image => "Images",
            Self::Document => "Documents",
            Self::Video => "Videos",
            Self::Audio => "Audios",
            Self::Archive => "Archives",
            Self::Unknown => "Unknown",
        }
    }

    /// Human-readable label for reports.
    pub fn label(self) -> &'static str {
        // Folder names already read well as plural labels.
        self.folder_name()
    }

    /// Stable index into per-category arrays.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Category whose destination folder is named `name`, if any.
    ///
    /// Exact, case-sensitive match.
    pub fn from_folder_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.folder_name() == name)
    }
}

/// `true` if `name` is one of the six reserved destination folder names.
pub fn is_reserved_folder(name: &str) -> bool {
    Category::from_folder_name(name).is_some()
}
