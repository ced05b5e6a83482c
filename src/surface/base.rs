//! Base location resolution.
//!
//! Relative resources in the previewed document (images, linked
//! stylesheets) resolve against the directory containing the file. The base
//! location is that directory with a trailing separator; surfaces need the
//! separator to recognize the location as a directory.

use std::fmt;
use std::path::{MAIN_SEPARATOR, Path};

/// Base location for resolving resources relative to the previewed file.
///
/// Empty when the document has no file path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseLocation(String);

impl BaseLocation {
    /// Resolve the base location for a document path.
    ///
    /// Returns the empty location for pathless documents and for bare file
    /// names with no containing directory.
    pub fn for_document(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => return Self::default(),
        };

        let mut base = dir.to_string_lossy().into_owned();
        if !base.ends_with(MAIN_SEPARATOR) {
            base.push(MAIN_SEPARATOR);
        }
        Self(base)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for BaseLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_pathless_document_has_empty_base() {
        let base = BaseLocation::for_document(None);
        assert!(base.is_empty());
        assert_eq!(base.as_str(), "");
    }

    #[test]
    fn test_base_is_containing_dir_with_trailing_separator() {
        let path = PathBuf::from("/home/user/notes/today.md");
        let base = BaseLocation::for_document(Some(&path));
        assert!(base.as_str().ends_with(MAIN_SEPARATOR));
        assert!(base.as_str().contains("notes"));
        assert!(!base.as_str().contains("today.md"));
    }

    #[test]
    fn test_bare_file_name_has_empty_base() {
        let path = PathBuf::from("today.md");
        let base = BaseLocation::for_document(Some(&path));
        assert!(base.is_empty());
    }

    #[test]
    fn test_real_directory_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("draft.md");
        let base = BaseLocation::for_document(Some(&file));

        assert!(base.as_str().ends_with(MAIN_SEPARATOR));
        assert!(
            Path::new(base.as_str().trim_end_matches(MAIN_SEPARATOR)).is_dir(),
            "base should point at the containing directory"
        );
    }
}
