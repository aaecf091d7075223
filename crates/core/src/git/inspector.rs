use std::path::Path;
use tracing::{debug, info};
use vendorscope_api::{
    CommitInfo, GitInfo, LibraryDirectory, LibraryVersionRecord, SubmoduleRecord, VcsRunner,
};

/// A submodule as listed by `git submodule status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmoduleRef {
    pub path: String,
    pub commit: String,
}

/// Parse `git submodule status` output.
///
/// Each line is `<marker><commit> <path> [(<describe>)]`; the `+`/`-` state
/// marker is stripped from the commit. Lines with fewer than two fields are
/// skipped.
pub fn parse_submodule_status(stdout: &str) -> Vec<SubmoduleRef> {
    let mut submodules = Vec::new();
    for line in stdout.lines() {
        let mut fields = line.split_whitespace();
        match (fields.next(), fields.next()) {
            (Some(commit), Some(path)) => {
                let commit = commit.trim_start_matches(['-', '+']).to_string();
                info!("Found submodule: path={}, commit={}", path, commit);
                submodules.push(SubmoduleRef {
                    path: path.to_string(),
                    commit,
                });
            }
            _ if line.trim().is_empty() => {}
            _ => info!("Skipping malformed line: {}", line),
        }
    }
    submodules
}

/// Parse `git show -s --format=%an|%ae|%ad` output.
pub fn parse_commit_info(stdout: &str) -> Option<CommitInfo> {
    let fields: Vec<&str> = stdout.trim().split('|').collect();
    match fields.as_slice() {
        [name, email, date] => Some(CommitInfo {
            author_name: name.to_string(),
            author_email: email.to_string(),
            author_date: date.to_string(),
        }),
        _ => None,
    }
}

fn non_empty(stdout: String) -> Option<String> {
    let trimmed = stdout.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub struct GitInspector {
    runner: Box<dyn VcsRunner>,
}

impl GitInspector {
    pub fn new(runner: Box<dyn VcsRunner>) -> Self {
        Self { runner }
    }

    fn git(&self, dir: &Path, args: &[&str]) -> Option<String> {
        self.runner.run(dir, args)
    }

    pub fn is_work_tree(&self, dir: &Path) -> bool {
        self.git(dir, &["rev-parse", "--is-inside-work-tree"]).is_some()
    }

    /// Submodules below `dir`; empty when git cannot list them.
    pub fn list_submodules(&self, dir: &Path) -> Vec<SubmoduleRef> {
        match self.git(dir, &["submodule", "status"]) {
            Some(stdout) => parse_submodule_status(&stdout),
            None => {
                info!("git submodule status failed in {}", dir.display());
                Vec::new()
            }
        }
    }

    pub fn tag_for_commit(&self, dir: &Path, commit: &str) -> Option<String> {
        self.git(dir, &["describe", "--tags", "--exact-match", commit])
            .and_then(non_empty)
    }

    pub fn remote_url(&self, dir: &Path) -> Option<String> {
        self.git(dir, &["remote", "get-url", "origin"])
            .and_then(non_empty)
    }

    pub fn commit_info(&self, dir: &Path, commit: &str) -> Option<CommitInfo> {
        self.git(dir, &["show", "-s", "--format=%an|%ae|%ad", commit])
            .as_deref()
            .and_then(parse_commit_info)
    }

    /// Resolve the git-side outcome for one library directory.
    pub fn inspect(&self, library: &LibraryDirectory) -> LibraryVersionRecord {
        let root = &library.path;
        let display_path = library.absolute_path().to_string_lossy().into_owned();
        info!("Processing library with Git: {}", library.name);

        if !self.is_work_tree(root) {
            return LibraryVersionRecord::no_git_repository(&library.name, display_path);
        }

        let submodules = self.list_submodules(root);
        if submodules.is_empty() {
            info!("No submodules found in {}", library.name);
            return LibraryVersionRecord::no_submodules(&library.name, display_path);
        }

        info!("Found {} submodules in {}", submodules.len(), library.name);
        let mut records = Vec::with_capacity(submodules.len());
        for submodule in submodules {
            let path = root.join(&submodule.path);
            if !path.is_dir() {
                debug!("Submodule {} is not checked out, skipping", submodule.path);
                continue;
            }

            let record = SubmoduleRecord {
                tag: self.tag_for_commit(&path, &submodule.commit),
                repository_url: self.remote_url(&path),
                commit_author: self.commit_info(&path, &submodule.commit),
                path: submodule.path,
                commit_hash: submodule.commit,
            };
            log_submodule(&record);
            records.push(record);
        }

        LibraryVersionRecord::GitResolved(GitInfo {
            name: library.name.clone(),
            submodules: records,
        })
    }
}

fn log_submodule(record: &SubmoduleRecord) {
    info!("Submodule: {}", record.path);
    info!("Commit: {}", record.short_commit());
    if let Some(tag) = &record.tag {
        info!("Tag: {}", tag);
    }
    if let Some(url) = &record.repository_url {
        info!("Repository: {}", url);
    }
    if let Some(author) = &record.commit_author {
        info!("Author: {} <{}>", author.author_name, author.author_email);
        info!("Date: {}", author.author_date);
    }
}
