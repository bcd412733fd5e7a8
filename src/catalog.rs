//! Ordered catalog of source files queued for conversion.
//!
//! The catalog is plain data: front ends render it and mutate it through
//! `add`/`remove_selected`/`clear`, and a conversion job consumes a snapshot
//! of it. Nothing here touches the filesystem; existence is checked when the
//! job opens each file.

use pixforge_common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// A single source file reference.
///
/// Immutable once added. The display name and current extension are derived
/// from the path at add time so list views don't re-parse on every paint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    path: PathBuf,
    name: String,
    extension: String,
}

impl SourceFile {
    fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_uppercase())
            .unwrap_or_default();
        Self {
            path,
            name,
            extension,
        }
    }

    /// Full path of the source file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name for display.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current extension, uppercased for display ("PNG", "JPG", ...).
    pub fn extension(&self) -> &str {
        &self.extension
    }
}

/// Insertion-ordered collection of source files.
///
/// Duplicates are allowed and processed independently; every element has been
/// explicitly added and not yet removed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    files: Vec<SourceFile>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source file built from a path or `file://` URI string.
    ///
    /// Returns the added entry. Fails with [`Error::InvalidReference`] when
    /// the string is empty, is a non-file URI, or cannot be converted into a
    /// local path.
    pub fn add(&mut self, reference: &str) -> Result<&SourceFile> {
        let path = parse_reference(reference)?;
        self.files.push(SourceFile::from_path(path));
        Ok(self.files.last().expect("just pushed"))
    }

    /// Remove the entries at the given positions.
    ///
    /// Every index is validated before anything is removed, so an
    /// [`Error::IndexOutOfRange`] leaves the catalog unchanged. Duplicate
    /// indices are tolerated.
    pub fn remove_selected(&mut self, indices: &[usize]) -> Result<()> {
        let len = self.files.len();
        for &index in indices {
            if index >= len {
                return Err(Error::IndexOutOfRange { index, len });
            }
        }

        let mut sorted: Vec<usize> = indices.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        // Remove back-to-front so earlier indices stay valid.
        for index in sorted.into_iter().rev() {
            self.files.remove(index);
        }
        Ok(())
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.files.clear();
    }

    /// Number of files in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Entry at the given position, if any.
    pub fn get(&self, index: usize) -> Option<&SourceFile> {
        self.files.get(index)
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, SourceFile> {
        self.files.iter()
    }

    /// All entries in insertion order.
    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a SourceFile;
    type IntoIter = std::slice::Iter<'a, SourceFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Parse a user-supplied reference (plain path or `file://` URI) into a path.
fn parse_reference(reference: &str) -> Result<PathBuf> {
    if reference.is_empty() {
        return Err(Error::invalid_reference("empty reference"));
    }
    if reference.contains('\0') {
        return Err(Error::invalid_reference("reference contains NUL byte"));
    }

    match Url::parse(reference) {
        Ok(url) if url.scheme() == "file" => url
            .to_file_path()
            .map_err(|()| Error::invalid_reference(reference)),
        // Single-letter schemes are Windows drive prefixes, not URIs.
        Ok(url) if url.scheme().len() > 1 => Err(Error::invalid_reference(reference)),
        _ => Ok(PathBuf::from(reference)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_add_derives_name_and_extension() {
        let mut catalog = Catalog::new();
        let file = catalog.add("/photos/holiday/beach.png").unwrap();
        assert_eq!(file.name(), "beach.png");
        assert_eq!(file.extension(), "PNG");
        assert_eq!(file.path(), Path::new("/photos/holiday/beach.png"));
    }

    #[test]
    fn test_add_accepts_file_uri() {
        let mut catalog = Catalog::new();
        let file = catalog.add("file:///photos/beach%20day.jpg").unwrap();
        assert_eq!(file.path(), Path::new("/photos/beach day.jpg"));
        assert_eq!(file.extension(), "JPG");
    }

    #[test]
    fn test_add_rejects_non_file_uri() {
        let mut catalog = Catalog::new();
        let err = catalog.add("http://example.com/beach.png").unwrap_err();
        assert_matches!(err, Error::InvalidReference(_));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_add_rejects_empty_reference() {
        let mut catalog = Catalog::new();
        assert_matches!(catalog.add("").unwrap_err(), Error::InvalidReference(_));
    }

    #[test]
    fn test_add_then_clear_yields_empty() {
        let mut catalog = Catalog::new();
        for i in 0..17 {
            catalog.add(&format!("/tmp/img_{}.png", i)).unwrap();
        }
        assert_eq!(catalog.len(), 17);
        catalog.clear();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_duplicates_are_allowed() {
        let mut catalog = Catalog::new();
        catalog.add("/tmp/same.png").unwrap();
        catalog.add("/tmp/same.png").unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_remove_selected() {
        let mut catalog = Catalog::new();
        catalog.add("/tmp/a.png").unwrap();
        catalog.add("/tmp/b.png").unwrap();
        catalog.add("/tmp/c.png").unwrap();

        catalog.remove_selected(&[2, 0]).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().name(), "b.png");
    }

    #[test]
    fn test_remove_selected_out_of_range_leaves_catalog_unchanged() {
        let mut catalog = Catalog::new();
        catalog.add("/tmp/a.png").unwrap();
        catalog.add("/tmp/b.png").unwrap();

        let err = catalog.remove_selected(&[0, 5]).unwrap_err();
        assert_matches!(err, Error::IndexOutOfRange { index: 5, len: 2 });
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().name(), "a.png");
    }

    #[test]
    fn test_remove_selected_tolerates_duplicate_indices() {
        let mut catalog = Catalog::new();
        catalog.add("/tmp/a.png").unwrap();
        catalog.add("/tmp/b.png").unwrap();

        catalog.remove_selected(&[1, 1]).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().name(), "a.png");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut catalog = Catalog::new();
        catalog.add("/tmp/z.png").unwrap();
        catalog.add("/tmp/a.png").unwrap();
        let names: Vec<&str> = catalog.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["z.png", "a.png"]);
    }
}
