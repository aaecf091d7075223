//! Locating the library directories to identify.

use crate::config::THIRD_PARTY_DIR_NAMES;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use vendorscope_api::LibraryDirectory;
use walkdir::{DirEntry, WalkDir};

/// Immediate subdirectories of `root`, each a library candidate.
///
/// Returns an empty list when `root` is not a readable directory; callers
/// check existence themselves and report the problem.
pub fn library_directories(root: &Path) -> Vec<LibraryDirectory> {
    let Ok(entries) = fs::read_dir(root) else {
        return Vec::new();
    };

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();

    dirs.into_iter().map(LibraryDirectory::new).collect()
}

pub fn is_third_party_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    THIRD_PARTY_DIR_NAMES.contains(&lower.as_str())
}

/// Every directory under `root` whose name marks it as a vendored-code
/// container, deduplicated by absolute path.
///
/// Immediate children come first, then the rest of the tree in walk order.
pub fn find_third_party_dirs(root: &Path) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    let mut found = Vec::new();

    let mut push = |path: PathBuf| {
        let key = std::path::absolute(&path).unwrap_or_else(|_| path.clone());
        if seen.insert(key) {
            info!("Found third-party directory: {}", path.display());
            found.push(path);
        }
    };

    for dir in library_directories(root) {
        if is_third_party_name(&dir.name) {
            push(dir.path);
        }
    }

    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };
        if is_directory(&entry) && is_third_party_name(&entry.file_name().to_string_lossy()) {
            push(entry.into_path());
        }
    }

    found
}

fn is_directory(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}
