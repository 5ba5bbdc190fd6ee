/// Extension-based categorization of files.
///
/// Categories are looked up in a fixed, ordered table. The first category whose
/// extension set contains a file's extension wins; anything else is `Others`.
///
/// # Examples
///
/// ```
/// use organize::file_category::{Category, category_for_extension};
///
/// assert_eq!(category_for_extension(".JPG"), Category::Images);
/// assert_eq!(category_for_extension(".gz"), Category::Archives);
/// assert_eq!(category_for_extension(""), Category::Others);
/// ```
use std::fmt;

/// Represents a destination category.
///
/// The variant order matches the lookup order of [`CATEGORY_TABLE`], with
/// `Others` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Image files (JPG, PNG, GIF, etc.)
    Images,
    /// Document files (PDF, DOCX, TXT, etc.)
    Documents,
    /// Video files (MP4, MKV, MOV, etc.)
    Videos,
    /// Audio files (MP3, WAV, FLAC, etc.)
    Audio,
    /// Archive files (ZIP, RAR, 7Z, etc.)
    Archives,
    /// Script files (Python, shell, PowerShell, etc.)
    Scripts,
    /// Anything without a known extension
    Others,
}

impl Category {
    /// Returns the directory name for this category.
    ///
    /// # Examples
    ///
    /// ```
    /// use organize::file_category::Category;
    ///
    /// assert_eq!(Category::Images.dir_name(), "Images");
    /// assert_eq!(Category::Others.dir_name(), "Others");
    /// ```
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Images => "Images",
            Category::Documents => "Documents",
            Category::Videos => "Videos",
            Category::Audio => "Audio",
            Category::Archives => "Archives",
            Category::Scripts => "Scripts",
            Category::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Lowercase extensions (with the leading dot) per category, in lookup order.
pub const CATEGORY_TABLE: &[(Category, &[&str])] = &[
    (
        Category::Images,
        &[".jpg", ".jpeg", ".png", ".gif", ".bmp", ".svg"],
    ),
    (
        Category::Documents,
        &[".pdf", ".doc", ".docx", ".txt", ".xlsx", ".pptx"],
    ),
    (Category::Videos, &[".mp4", ".avi", ".mkv", ".mov", ".wmv"]),
    (Category::Audio, &[".mp3", ".wav", ".flac", ".aac"]),
    (Category::Archives, &[".zip", ".rar", ".7z", ".tar", ".gz"]),
    (Category::Scripts, &[".py", ".sh", ".ps1", ".bat", ".js"]),
];

/// Maps an extension (with the leading dot) to its category.
///
/// Matching is case-insensitive. An empty or unknown extension yields
/// `Category::Others`.
///
/// # Examples
///
/// ```
/// use organize::file_category::{Category, category_for_extension};
///
/// assert_eq!(category_for_extension(".pdf"), Category::Documents);
/// assert_eq!(category_for_extension(".PY"), Category::Scripts);
/// assert_eq!(category_for_extension(".xyz"), Category::Others);
/// ```
pub fn category_for_extension(extension: &str) -> Category {
    if extension.is_empty() {
        return Category::Others;
    }

    let extension = extension.to_lowercase();
    CATEGORY_TABLE
        .iter()
        .find(|(_, extensions)| extensions.contains(&extension.as_str()))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Others)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_category_dir_names() {
        assert_eq!(Category::Images.dir_name(), "Images");
        assert_eq!(Category::Documents.dir_name(), "Documents");
        assert_eq!(Category::Videos.dir_name(), "Videos");
        assert_eq!(Category::Audio.dir_name(), "Audio");
        assert_eq!(Category::Archives.dir_name(), "Archives");
        assert_eq!(Category::Scripts.dir_name(), "Scripts");
        assert_eq!(Category::Others.dir_name(), "Others");
    }

    #[test]
    fn test_table_is_lowercase_and_dotted() {
        for (_, extensions) in CATEGORY_TABLE {
            for ext in *extensions {
                assert!(ext.starts_with('.'), "{ext} should start with a dot");
                assert_eq!(*ext, ext.to_lowercase());
            }
        }
    }

    #[test]
    fn test_table_has_no_overlapping_extensions() {
        let mut seen = HashSet::new();
        for (_, extensions) in CATEGORY_TABLE {
            for ext in *extensions {
                assert!(seen.insert(*ext), "{ext} listed twice");
            }
        }
    }

    #[test]
    fn test_table_order_matches_enum_order() {
        let order: Vec<Category> = CATEGORY_TABLE.iter().map(|(c, _)| *c).collect();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
        assert!(!order.contains(&Category::Others));
    }

    #[test]
    fn test_every_table_extension_maps_to_its_category() {
        for (category, extensions) in CATEGORY_TABLE {
            for ext in *extensions {
                assert_eq!(category_for_extension(ext), *category);
                assert_eq!(category_for_extension(&ext.to_uppercase()), *category);
            }
        }
    }

    #[test]
    fn test_unknown_and_missing_extensions_are_others() {
        assert_eq!(category_for_extension(".xyz"), Category::Others);
        assert_eq!(category_for_extension(""), Category::Others);
        assert_eq!(category_for_extension("."), Category::Others);
    }
}
