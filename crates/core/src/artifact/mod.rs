//! Per-library JSON artifacts and the repository that reads them back.
//!
//! Artifacts are the only state shared between a scan and a report: each
//! strategy writes `{name}_<kind>.json` into the library directory, and the
//! report is rebuilt from whatever files are on disk.

mod repository;

pub use repository::{ArtifactRepository, ArtifactSet, library_name_from_artifact};

use crate::error::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArtifactKind {
    /// Fingerprint set, written in debug mode only
    Hashes,
    OsvResponse,
    GitInfo,
    NoGitInfo,
    NoSubmodulesInfo,
}

impl ArtifactKind {
    pub fn suffix(self) -> &'static str {
        match self {
            ArtifactKind::Hashes => "_hashes.json",
            ArtifactKind::OsvResponse => "_osv_response.json",
            ArtifactKind::GitInfo => "_git_info.json",
            ArtifactKind::NoGitInfo => "_no_git_info.json",
            ArtifactKind::NoSubmodulesInfo => "_no_submodules_info.json",
        }
    }

    pub fn file_name(self, library: &str) -> String {
        format!("{}{}", library, self.suffix())
    }

    /// Category of an artifact file name.
    ///
    /// `_no_git_info.json` also ends in `_git_info.json`, so the longer
    /// suffixes are tried first and every file lands in exactly one category.
    pub fn classify(file_name: &str) -> Option<ArtifactKind> {
        [
            ArtifactKind::NoSubmodulesInfo,
            ArtifactKind::NoGitInfo,
            ArtifactKind::GitInfo,
            ArtifactKind::OsvResponse,
            ArtifactKind::Hashes,
        ]
        .into_iter()
        .find(|kind| file_name.ends_with(kind.suffix()))
    }
}

pub fn artifact_path(dir: &Path, library: &str, kind: ArtifactKind) -> PathBuf {
    dir.join(kind.file_name(library))
}

/// Serialize `value` as indented JSON into `dir`, replacing any previous
/// artifact of the same kind.
pub fn write_artifact<T: Serialize + ?Sized>(
    dir: &Path,
    library: &str,
    kind: ArtifactKind,
    value: &T,
) -> Result<PathBuf> {
    let path = artifact_path(dir, library, kind);
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    std::fs::write(&path, json)?;
    info!("Saved {}", std::path::absolute(&path).unwrap_or_else(|_| path.clone()).display());
    Ok(path)
}
