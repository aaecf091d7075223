#![allow(dead_code)]

use serde_json::{Value, json};
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;
use vendorscope_api::{
    FingerprintSet, LibraryDirectory, LibraryVersionRecord, ScanReporter, VcsRunner,
    VersionIdentifier,
};
use vendorscope_core::cascade::Cascade;
use vendorscope_core::config::ScanConfig;
use vendorscope_core::git::GitInspector;

/// Captures everything the pipeline reports.
#[derive(Default)]
pub struct RecordingReporter {
    pub started: RefCell<Vec<String>>,
    pub records: RefCell<Vec<LibraryVersionRecord>>,
    pub reports: RefCell<Vec<String>>,
}

impl ScanReporter for RecordingReporter {
    fn directory_started(&self, dir: &LibraryDirectory) {
        self.started.borrow_mut().push(dir.name.clone());
    }

    fn record(&self, record: &LibraryVersionRecord) {
        self.records.borrow_mut().push(record.clone());
    }

    fn report(&self, markdown: &str) {
        self.reports.borrow_mut().push(markdown.to_string());
    }
}

/// Git that never finds a work tree.
pub struct NoGit;

impl VcsRunner for NoGit {
    fn run(&self, _dir: &Path, _args: &[&str]) -> Option<String> {
        None
    }
}

/// Identification service stub that answers every request with the same document.
#[derive(Clone, Default)]
pub struct StubIdentifier {
    pub answer: Option<Value>,
    pub requests: Rc<RefCell<Vec<FingerprintSet>>>,
}

impl StubIdentifier {
    pub fn answering(answer: Option<Value>) -> Self {
        Self {
            answer,
            requests: Rc::default(),
        }
    }
}

impl VersionIdentifier for StubIdentifier {
    fn identify(&self, set: &FingerprintSet) -> Option<Value> {
        self.requests.borrow_mut().push(set.clone());
        self.answer.clone()
    }
}

pub fn zlib_response() -> Value {
    json!({
        "matches": [
            {
                "score": 0.7,
                "repo_info": {
                    "type": "GIT",
                    "address": "https://github.com/madler/zlib.git",
                    "tag": "v1.2.12",
                    "version": "1.2.12"
                },
                "minimum_file_matches": 12
            },
            {
                "score": 0.95,
                "repo_info": {
                    "type": "GIT",
                    "address": "https://github.com/madler/zlib.git",
                    "tag": "v1.2.13",
                    "version": "1.2.13"
                },
                "minimum_file_matches": 14,
                "estimated_diff_files": 1
            },
            {
                "score": 0.4,
                "repo_info": {
                    "type": "GIT",
                    "address": "https://github.com/madler/zlib.git",
                    "tag": "v1.2.11",
                    "version": "1.2.11"
                }
            }
        ]
    })
}

pub fn cascade(vcs: impl VcsRunner + 'static, identifier: StubIdentifier) -> Cascade {
    Cascade::new(
        ScanConfig::default(),
        GitInspector::new(Box::new(vcs)),
        Box::new(identifier),
    )
}

pub fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// A small vendored tree with two libraries and one non-library directory.
pub fn vendored_tree(root: &Path) {
    write_file(&root.join("zlib/inflate.c"), "int inflate(void) { return 0; }\n");
    write_file(&root.join("zlib/zlib.h"), "#define ZLIB_VERSION \"1.2.13\"\n");
    write_file(&root.join("fmt/include/fmt/core.h"), "#pragma once\n");
    write_file(&root.join("fmt/src/format.cc"), "// fmt\n");
    write_file(&root.join("docs/README.md"), "vendored code\n");
}
