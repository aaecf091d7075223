use super::matches::VersionMatch;
use super::submodule::SubmoduleRecord;
use serde::{Deserialize, Serialize};

pub const NOT_A_GIT_REPOSITORY: &str = "Not a Git repository";
pub const NO_SUBMODULES_FOUND: &str = "No submodules found";

/// Payload of `{name}_git_info.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitInfo {
    pub name: String,
    pub submodules: Vec<SubmoduleRecord>,
}

/// Payload of `{name}_no_git_info.json` and `{name}_no_submodules_info.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitAbsence {
    pub name: String,
    pub path: String,
    pub reason: String,
}

/// Top candidates the identification service returned for a library.
#[derive(Debug, Clone, PartialEq)]
pub struct HashResolution {
    pub name: String,
    /// At most the configured number of matches, best first
    pub top_matches: Vec<VersionMatch>,
}

/// A library with C/C++ sources but no recorded service response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedLibrary {
    pub name: String,
    pub path: String,
}

/// The resolved outcome for one library directory.
///
/// A directory can produce one git-side outcome and, independently, one
/// hash-side outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum LibraryVersionRecord {
    GitResolved(GitInfo),
    NoGitRepository(GitAbsence),
    NoSubmodules(GitAbsence),
    HashResolved(HashResolution),
    Failed(FailedLibrary),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    GitResolved,
    NoGitRepository,
    NoSubmodules,
    HashResolved,
    Failed,
}

impl RecordKind {
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::GitResolved => "git submodules",
            RecordKind::NoGitRepository => "no git repository",
            RecordKind::NoSubmodules => "no submodules",
            RecordKind::HashResolved => "hash match",
            RecordKind::Failed => "failed",
        }
    }
}

impl LibraryVersionRecord {
    pub fn no_git_repository(name: impl Into<String>, path: impl Into<String>) -> Self {
        LibraryVersionRecord::NoGitRepository(GitAbsence {
            name: name.into(),
            path: path.into(),
            reason: NOT_A_GIT_REPOSITORY.to_string(),
        })
    }

    pub fn no_submodules(name: impl Into<String>, path: impl Into<String>) -> Self {
        LibraryVersionRecord::NoSubmodules(GitAbsence {
            name: name.into(),
            path: path.into(),
            reason: NO_SUBMODULES_FOUND.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        match self {
            LibraryVersionRecord::GitResolved(info) => &info.name,
            LibraryVersionRecord::NoGitRepository(info) => &info.name,
            LibraryVersionRecord::NoSubmodules(info) => &info.name,
            LibraryVersionRecord::HashResolved(res) => &res.name,
            LibraryVersionRecord::Failed(lib) => &lib.name,
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            LibraryVersionRecord::GitResolved(_) => RecordKind::GitResolved,
            LibraryVersionRecord::NoGitRepository(_) => RecordKind::NoGitRepository,
            LibraryVersionRecord::NoSubmodules(_) => RecordKind::NoSubmodules,
            LibraryVersionRecord::HashResolved(_) => RecordKind::HashResolved,
            LibraryVersionRecord::Failed(_) => RecordKind::Failed,
        }
    }
}
