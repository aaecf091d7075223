use super::{ArtifactKind, artifact_path};
use crate::discovery::library_directories;
use crate::error::Result;
use crate::fingerprint::contains_source_files;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};
use vendorscope_api::{
    FailedLibrary, GitAbsence, GitInfo, HashResolution, ServiceResponse,
};
use walkdir::WalkDir;

/// Library name for a response artifact: the containing directory's name
/// with `-` normalized to `_`.
///
/// The payload's own `name` is not used; older artifacts do not carry one.
pub fn library_name_from_artifact(path: &Path) -> String {
    path.parent()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().replace('-', "_"))
        .unwrap_or_default()
}

/// Every artifact found under a root, parsed and grouped by category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtifactSet {
    pub hash_resolved: Vec<HashResolution>,
    pub git_resolved: Vec<GitInfo>,
    pub no_git: Vec<GitAbsence>,
    pub no_submodules: Vec<GitAbsence>,
    pub failed: Vec<FailedLibrary>,
}

impl ArtifactSet {
    pub fn is_empty(&self) -> bool {
        self.hash_resolved.is_empty()
            && self.git_resolved.is_empty()
            && self.no_git.is_empty()
            && self.no_submodules.is_empty()
            && self.failed.is_empty()
    }
}

/// Read-only view of the artifacts persisted below a root directory.
pub struct ArtifactRepository {
    root: PathBuf,
}

impl ArtifactRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Artifact files anywhere below the root, grouped by category, in
    /// file-name walk order.
    pub fn discover(&self) -> BTreeMap<ArtifactKind, Vec<PathBuf>> {
        let mut found: BTreeMap<ArtifactKind, Vec<PathBuf>> = BTreeMap::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!("Skipping unreadable entry under {}: {}", self.root.display(), e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(kind) = ArtifactKind::classify(&entry.file_name().to_string_lossy()) {
                found.entry(kind).or_default().push(entry.into_path());
            }
        }
        found
    }

    pub fn find(&self, kind: ArtifactKind) -> Vec<PathBuf> {
        self.discover().remove(&kind).unwrap_or_default()
    }

    /// Parse every artifact and run the failed-library scan.
    ///
    /// `top_matches` bounds the candidates kept per response. An artifact
    /// that cannot be read or parsed is logged and left out.
    pub fn load(&self, top_matches: usize) -> ArtifactSet {
        let mut files = self.discover();
        let mut take = |kind: ArtifactKind| files.remove(&kind).unwrap_or_default();

        let mut set = ArtifactSet::default();
        for path in take(ArtifactKind::OsvResponse) {
            match read_hash_resolution(&path, top_matches) {
                Ok(res) => set.hash_resolved.push(res),
                Err(e) => error!("Error processing {}: {}", path.display(), e),
            }
        }
        set.git_resolved = parse_all(take(ArtifactKind::GitInfo));
        set.no_git = parse_all(take(ArtifactKind::NoGitInfo));
        set.no_submodules = parse_all(take(ArtifactKind::NoSubmodulesInfo));
        set.failed = self.failed_libraries();
        set
    }

    /// Immediate children of the root that hold C/C++ sources but have no
    /// `<child>/<child>_osv_response.json`.
    ///
    /// Only the child's own directory is checked for the response, while
    /// response discovery elsewhere is recursive. A child whose response lives
    /// deeper in its tree is still reported as failed; a warning names the
    /// nested artifact so the mismatch is visible.
    pub fn failed_libraries(&self) -> Vec<FailedLibrary> {
        let mut failed = Vec::new();
        for dir in library_directories(&self.root) {
            if !contains_source_files(&dir.path) {
                continue;
            }
            if artifact_path(&dir.path, &dir.name, ArtifactKind::OsvResponse).exists() {
                continue;
            }

            let nested = ArtifactRepository::new(&dir.path).find(ArtifactKind::OsvResponse);
            if let Some(first) = nested.first() {
                warn!(
                    "{} is reported as failed although a response exists at {}",
                    dir.name,
                    first.display()
                );
            }

            failed.push(FailedLibrary {
                path: dir.absolute_path().to_string_lossy().into_owned(),
                name: dir.name,
            });
        }
        failed
    }
}

fn read_json(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn read_hash_resolution(path: &Path, top_matches: usize) -> Result<HashResolution> {
    let response = ServiceResponse::from_value(&read_json(path)?)?;
    Ok(HashResolution {
        name: library_name_from_artifact(path),
        top_matches: response.top_matches(top_matches),
    })
}

fn parse_all<T: DeserializeOwned>(paths: Vec<PathBuf>) -> Vec<T> {
    paths
        .into_iter()
        .filter_map(|path| {
            match read_json(&path).and_then(|v| Ok(serde_json::from_value::<T>(v)?)) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    error!("Error processing {}: {}", path.display(), e);
                    None
                }
            }
        })
        .collect()
}
