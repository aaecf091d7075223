//! Aggregated dependency report.

mod markdown;

use crate::artifact::{ArtifactRepository, ArtifactSet};
use crate::config::ScanConfig;
use crate::error::{Result, ScanError};
use std::path::{Path, PathBuf};
use tracing::{error, info};
use vendorscope_api::ScanReporter;

pub const REPORT_TITLE: &str = "Dependency Report";

pub const HASH_SECTION: &str = "Successfully Processed Libraries (OSV API)";
pub const GIT_SECTION: &str = "Library Versions from Git Submodules";
pub const NO_GIT_SECTION: &str = "Libraries Without Git Repository";
pub const NO_SUBMODULES_SECTION: &str = "Git Repositories Without Submodules";
pub const FAILED_SECTION: &str = "Failed Libraries";

/// One table of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub headers: &'static [&'static str],
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub sections: Vec<Section>,
}

impl Report {
    /// Lay out the artifact set as sections in fixed order. Categories with
    /// no rows produce no section.
    pub fn from_artifacts(set: &ArtifactSet) -> Self {
        let hash_rows = set
            .hash_resolved
            .iter()
            .flat_map(|res| {
                res.top_matches.iter().map(|m| {
                    vec![
                        res.name.clone(),
                        m.version.clone(),
                        m.score.to_string(),
                        m.repository_address.clone(),
                        m.tag.clone(),
                        m.minimum_file_matches_display(),
                        m.estimated_diff_files_display(),
                    ]
                })
            })
            .collect();

        let git_rows = set
            .git_resolved
            .iter()
            .flat_map(|info| {
                info.submodules.iter().map(|s| {
                    vec![
                        info.name.clone(),
                        s.path.clone(),
                        s.short_commit(),
                        s.tag_display().to_string(),
                        s.repository_display().to_string(),
                    ]
                })
            })
            .collect();

        let absence_rows = |entries: &[vendorscope_api::GitAbsence]| {
            entries
                .iter()
                .map(|e| vec![e.name.clone(), e.path.clone(), e.reason.clone()])
                .collect::<Vec<_>>()
        };

        let failed_rows = set
            .failed
            .iter()
            .map(|f| vec![f.name.clone(), f.path.clone()])
            .collect();

        let candidates = [
            Section {
                title: HASH_SECTION,
                headers: &[
                    "Library",
                    "Version",
                    "Score",
                    "Repository",
                    "Tag",
                    "File Matches",
                    "Different Files",
                ],
                rows: hash_rows,
            },
            Section {
                title: GIT_SECTION,
                headers: &["Library", "Submodule Path", "Commit", "Tag", "Repository"],
                rows: git_rows,
            },
            Section {
                title: NO_GIT_SECTION,
                headers: &["Library", "Path", "Reason"],
                rows: absence_rows(set.no_git.as_slice()),
            },
            Section {
                title: NO_SUBMODULES_SECTION,
                headers: &["Library", "Path", "Reason"],
                rows: absence_rows(set.no_submodules.as_slice()),
            },
            Section {
                title: FAILED_SECTION,
                headers: &["Library", "Path"],
                rows: failed_rows,
            },
        ];

        Self {
            sections: candidates.into_iter().filter(|s| !s.rows.is_empty()).collect(),
        }
    }

    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    pub fn to_markdown(&self) -> String {
        markdown::render(self)
    }
}

/// Build the report for `root` from the artifacts on disk.
///
/// The markdown is written to `root/<config.report_file>` and handed to the
/// reporter. Returns `None` when nothing under `root` produced an artifact.
/// An invalid `config`, including an absolute `report_file`, is rejected
/// before anything is read or written.
pub fn generate_report(
    root: &Path,
    config: &ScanConfig,
    reporter: &dyn ScanReporter,
) -> Result<Option<PathBuf>> {
    config.validate()?;
    if !root.is_dir() {
        return Err(ScanError::InvalidRoot(root.to_path_buf()));
    }

    let set = ArtifactRepository::new(root).load(config.top_matches);
    if set.is_empty() {
        error!("No relevant files found in {} or its subdirectories", root.display());
        return Ok(None);
    }

    info!(
        "Found {} OSV responses, {} failed libraries, {} Git info, {} no-git and {} no-submodules artifacts",
        set.hash_resolved.len(),
        set.failed.len(),
        set.git_resolved.len(),
        set.no_git.len(),
        set.no_submodules.len()
    );

    let report_path = root.join(&config.report_file);
    info!("Generating report at: {}", report_path.display());

    let markdown = Report::from_artifacts(&set).to_markdown();
    reporter.report(&markdown);
    if let Some(parent) = report_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&report_path, &markdown)?;

    info!("Report generated successfully at: {}", report_path.display());
    Ok(Some(report_path))
}
