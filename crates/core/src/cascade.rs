//! Per-directory identification: git metadata first, then content hashes.
//!
//! Both strategies always run and neither looks at the other's result. Each
//! one persists its own artifact; a failure in one directory or strategy is
//! logged and the run moves on.

use crate::artifact::{ArtifactKind, write_artifact};
use crate::config::ScanConfig;
use crate::discovery::{find_third_party_dirs, library_directories};
use crate::error::{Result, ScanError};
use crate::fingerprint::Fingerprinter;
use crate::git::GitInspector;
use crate::identify::log_matches;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use vendorscope_api::{
    HashResolution, LibraryDirectory, LibraryVersionRecord, RecordKind, ScanReporter,
    ServiceResponse, VersionIdentifier,
};

/// What the cascade did for one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryOutcome {
    pub name: String,
    pub path: PathBuf,
    pub git: RecordKind,
    /// A service response with at least one match was persisted
    pub hash_recorded: bool,
    pub files_fingerprinted: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub outcomes: Vec<DirectoryOutcome>,
}

impl ScanSummary {
    pub fn hash_recorded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.hash_recorded).count()
    }

    fn extend(&mut self, other: ScanSummary) {
        self.outcomes.extend(other.outcomes);
    }
}

pub struct Cascade {
    config: ScanConfig,
    git: GitInspector,
    fingerprinter: Fingerprinter,
    identifier: Box<dyn VersionIdentifier>,
}

impl Cascade {
    pub fn new(
        config: ScanConfig,
        git: GitInspector,
        identifier: Box<dyn VersionIdentifier>,
    ) -> Self {
        Self {
            fingerprinter: Fingerprinter::new(config.digest),
            config,
            git,
            identifier,
        }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Run the git inspector and persist whichever outcome it produced.
    pub fn identify_by_git(
        &self,
        library: &LibraryDirectory,
        reporter: &dyn ScanReporter,
    ) -> LibraryVersionRecord {
        let record = self.git.inspect(library);

        let written = match &record {
            LibraryVersionRecord::GitResolved(info) => {
                info!("Found version information using Git submodules in {}", library.name);
                write_artifact(&library.path, &library.name, ArtifactKind::GitInfo, info)
            }
            LibraryVersionRecord::NoGitRepository(absence) => {
                write_artifact(&library.path, &library.name, ArtifactKind::NoGitInfo, absence)
            }
            LibraryVersionRecord::NoSubmodules(absence) => write_artifact(
                &library.path,
                &library.name,
                ArtifactKind::NoSubmodulesInfo,
                absence,
            ),
            // the inspector only yields git-side outcomes
            LibraryVersionRecord::HashResolved(_) | LibraryVersionRecord::Failed(_) => {
                return record;
            }
        };
        if let Err(e) = written {
            error!("Failed to save Git outcome for {}: {}", library.name, e);
        }

        reporter.record(&record);
        record
    }

    /// Fingerprint the directory and ask the identification service.
    ///
    /// Returns the number of fingerprinted files and, when the service
    /// answered with at least one match, the resolved record. No answer
    /// writes no artifact.
    pub fn identify_by_hash(
        &self,
        library: &LibraryDirectory,
        reporter: &dyn ScanReporter,
    ) -> (usize, Option<LibraryVersionRecord>) {
        info!("Processing library: {}", library.name);
        info!("Target directory: {}", library.absolute_path().display());

        let set = self.fingerprinter.fingerprint(&library.path, &library.name);
        let files = set.len();

        if self.config.debug {
            if let Err(e) = write_artifact(&library.path, &library.name, ArtifactKind::Hashes, &set) {
                error!("Failed to save file hashes for {}: {}", library.name, e);
            }
        }

        let Some(document) = self.identifier.identify(&set) else {
            error!("Failed to get response from OSV API for {}", library.name);
            return (files, None);
        };

        let response = match ServiceResponse::from_value(&document) {
            Ok(response) => response,
            Err(e) => {
                warn!("Unusable OSV API response for {}: {}", library.name, e);
                return (files, None);
            }
        };
        if !response.has_matches() {
            info!("OSV API returned no matches for {}", library.name);
            return (files, None);
        }

        if let Err(e) = write_artifact(
            &library.path,
            &library.name,
            ArtifactKind::OsvResponse,
            &document,
        ) {
            error!("Failed to save OSV API response for {}: {}", library.name, e);
            return (files, None);
        }
        log_matches(&document);

        let record = LibraryVersionRecord::HashResolved(HashResolution {
            name: library.name.clone(),
            top_matches: response.top_matches(self.config.top_matches),
        });
        reporter.record(&record);
        (files, Some(record))
    }

    /// Both strategies, in order, for one directory.
    pub fn process_directory(
        &self,
        library: &LibraryDirectory,
        reporter: &dyn ScanReporter,
    ) -> DirectoryOutcome {
        reporter.directory_started(library);
        info!("Processing directory: {}", library.name);

        let git = self.identify_by_git(library, reporter);

        info!("Attempting file hashing version detection for: {}", library.name);
        let (files, hash) = self.identify_by_hash(library, reporter);
        if hash.is_some() {
            info!("Found version information using file hashing for: {}", library.name);
        } else {
            info!("No version information found using file hashing for: {}", library.name);
        }

        DirectoryOutcome {
            name: library.name.clone(),
            path: library.path.clone(),
            git: git.kind(),
            hash_recorded: hash.is_some(),
            files_fingerprinted: files,
        }
    }

    /// Run the cascade over every immediate subdirectory of `root`.
    pub fn process_root(&self, root: &Path, reporter: &dyn ScanReporter) -> Result<ScanSummary> {
        if !root.is_dir() {
            return Err(ScanError::InvalidRoot(root.to_path_buf()));
        }

        let outcomes = library_directories(root)
            .iter()
            .map(|library| self.process_directory(library, reporter))
            .collect();
        Ok(ScanSummary { outcomes })
    }

    /// Find every third-party container under `root` and run the cascade over
    /// each one's children.
    pub fn process_third_party(
        &self,
        root: &Path,
        reporter: &dyn ScanReporter,
    ) -> Result<ScanSummary> {
        if !root.is_dir() {
            return Err(ScanError::InvalidRoot(root.to_path_buf()));
        }

        let containers = find_third_party_dirs(root);
        if containers.is_empty() {
            warn!("No third-party directories found in {}", root.display());
            return Ok(ScanSummary::default());
        }
        info!("Found {} third-party directories to process", containers.len());

        let mut summary = ScanSummary::default();
        for container in containers {
            info!("Processing third-party directory: {}", container.display());
            summary.extend(self.process_root(&container, reporter)?);
        }
        Ok(summary)
    }
}
