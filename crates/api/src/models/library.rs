use std::path::{Path, PathBuf};

/// A directory treated as one vendored library.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LibraryDirectory {
    /// Final path segment of the directory
    pub name: String,
    pub path: PathBuf,
}

impl LibraryDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = library_name(&path);
        Self { name, path }
    }

    /// Absolute form of the path, falling back to the path as given.
    pub fn absolute_path(&self) -> PathBuf {
        std::path::absolute(&self.path).unwrap_or_else(|_| self.path.clone())
    }
}

/// Derive a library name from the last component of `path`.
///
/// Paths such as `.` or `foo/..` have no usable file name, so they are
/// normalized through the absolute path first.
pub fn library_name(path: &Path) -> String {
    let named = |p: &Path| {
        p.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .filter(|n| !n.is_empty())
    };

    named(path)
        .filter(|n| n != "." && n != "..")
        .or_else(|| path.canonicalize().ok().as_deref().and_then(named))
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
