mod common;

use common::*;
use std::fs;
use vendorscope_api::{LibraryVersionRecord, RecordKind, SilentReporter};
use vendorscope_core::config::ScanConfig;
use vendorscope_core::report::{
    FAILED_SECTION, GIT_SECTION, HASH_SECTION, NO_GIT_SECTION, Report, generate_report,
};
use vendorscope_core::artifact::ArtifactRepository;
use vendorscope_core::ScanError;
use walkdir::WalkDir;

#[test]
fn non_git_directory_gets_only_no_git_artifact() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    vendored_tree(root);

    let cascade = cascade(NoGit, StubIdentifier::answering(None));
    let summary = cascade.process_root(root, &SilentReporter).unwrap();

    assert_eq!(summary.outcomes.len(), 3);
    for outcome in &summary.outcomes {
        assert_eq!(outcome.git, RecordKind::NoGitRepository);
        let dir = root.join(&outcome.name);
        assert!(dir.join(format!("{}_no_git_info.json", outcome.name)).exists());
        assert!(!dir.join(format!("{}_git_info.json", outcome.name)).exists());
        assert!(!dir.join(format!("{}_no_submodules_info.json", outcome.name)).exists());
    }
}

#[test]
fn every_directory_is_fingerprinted_and_sent() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    vendored_tree(root);

    let identifier = StubIdentifier::answering(Some(zlib_response()));
    let cascade = cascade(NoGit, identifier.clone());
    let reporter = RecordingReporter::default();
    let summary = cascade.process_root(root, &reporter).unwrap();

    let requests = identifier.requests.borrow();
    let names: Vec<_> = requests.iter().map(|r| r.library_name.as_str()).collect();
    assert_eq!(names, vec!["docs", "fmt", "zlib"]);

    let zlib = requests.iter().find(|r| r.library_name == "zlib").unwrap();
    let paths: Vec<_> = zlib.files.iter().map(|f| f.relative_path.as_str()).collect();
    assert_eq!(paths, vec!["inflate.c", "zlib.h"]);

    assert_eq!(summary.hash_recorded(), 3);
    assert!(root.join("zlib/zlib_osv_response.json").exists());
    assert_eq!(*reporter.started.borrow(), vec!["docs", "fmt", "zlib"]);

    let hash_records: Vec<_> = reporter
        .records
        .borrow()
        .iter()
        .filter_map(|r| match r {
            LibraryVersionRecord::HashResolved(res) => Some(res.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(hash_records.len(), 3);
    assert_eq!(hash_records[0].top_matches[0].version, "1.2.13");
}

#[test]
fn no_service_answer_writes_nothing_and_reports_failed() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    vendored_tree(root);

    let cascade = cascade(NoGit, StubIdentifier::answering(None));
    cascade.process_root(root, &SilentReporter).unwrap();

    assert!(!root.join("zlib/zlib_osv_response.json").exists());

    let set = ArtifactRepository::new(root).load(3);
    let failed: Vec<_> = set.failed.iter().map(|f| f.name.as_str()).collect();
    // docs holds no C/C++ sources
    assert_eq!(failed, vec!["fmt", "zlib"]);

    let report = Report::from_artifacts(&set);
    assert!(report.section(HASH_SECTION).is_none());
    assert_eq!(report.section(FAILED_SECTION).unwrap().rows.len(), 2);
    assert_eq!(report.section(NO_GIT_SECTION).unwrap().rows.len(), 3);
}

#[test]
fn empty_match_list_is_not_a_response() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    vendored_tree(root);

    let answer = serde_json::json!({ "matches": [] });
    let cascade = cascade(NoGit, StubIdentifier::answering(Some(answer)));
    let summary = cascade.process_root(root, &SilentReporter).unwrap();

    assert_eq!(summary.hash_recorded(), 0);
    assert!(!root.join("fmt/fmt_osv_response.json").exists());
}

#[test]
fn debug_mode_saves_fingerprints() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    vendored_tree(root);

    let config = ScanConfig {
        debug: true,
        ..ScanConfig::default()
    };
    let cascade = vendorscope_core::cascade::Cascade::new(
        config,
        vendorscope_core::git::GitInspector::new(Box::new(NoGit)),
        Box::new(StubIdentifier::answering(None)),
    );
    cascade.process_root(root, &SilentReporter).unwrap();

    let text = fs::read_to_string(root.join("zlib/zlib_hashes.json")).unwrap();
    let saved: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(saved["name"], "zlib");
    assert_eq!(saved["file_hashes"].as_array().unwrap().len(), 2);
}

#[test]
fn rerun_leaves_artifacts_byte_identical() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    vendored_tree(root);

    let config = ScanConfig {
        debug: true,
        ..ScanConfig::default()
    };
    let run = || {
        let cascade = vendorscope_core::cascade::Cascade::new(
            config.clone(),
            vendorscope_core::git::GitInspector::new(Box::new(NoGit)),
            Box::new(StubIdentifier::answering(Some(zlib_response()))),
        );
        cascade.process_root(root, &SilentReporter).unwrap();
        generate_report(root, &config, &SilentReporter).unwrap();
    };

    let snapshot = || {
        let mut files: Vec<(String, Vec<u8>)> = walk_files(root)
            .into_iter()
            .map(|p| (p.display().to_string(), fs::read(&p).unwrap()))
            .collect();
        files.sort();
        files
    };

    run();
    let first = snapshot();
    run();
    let second = snapshot();
    assert_eq!(first, second);
}

fn walk_files(root: &std::path::Path) -> Vec<std::path::PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| entry.unwrap())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect()
}

#[test]
fn response_file_clears_failed_classification() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    write_file(&root.join("lib/a.cpp"), "int a;\n");
    write_file(&root.join("lib/a.h"), "extern int a;\n");

    let repo = ArtifactRepository::new(root);
    assert_eq!(repo.failed_libraries().len(), 1);

    write_file(
        &root.join("lib/lib_osv_response.json"),
        &zlib_response().to_string(),
    );
    assert!(repo.failed_libraries().is_empty());
}

#[test]
fn report_from_git_and_hash_artifacts() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    write_file(
        &root.join("engine/engine_git_info.json"),
        r#"{
  "name": "engine",
  "submodules": [
    {
      "path": "ext/fmt",
      "commit": "a33701196adfad74917046096bf5a2aa0ab0bb50",
      "tag": "10.1.0",
      "repository": "https://github.com/fmtlib/fmt.git",
      "commit_info": null
    },
    {
      "path": "ext/spdlog",
      "commit": "7e635fca68d014934b4af8a1cf874f63989352b7",
      "tag": "No tag found",
      "repository": "No remote URL found",
      "commit_info": {
        "author_name": "Gabi Melman",
        "author_email": "gmelman1@gmail.com",
        "author_date": "Sat Jul 8 17:12:25 2023 +0300"
      }
    }
  ]
}"#,
    );
    write_file(
        &root.join("z-lib/z-lib_osv_response.json"),
        &zlib_response().to_string(),
    );

    let reporter = RecordingReporter::default();
    let path = generate_report(root, &ScanConfig::default(), &reporter)
        .unwrap()
        .unwrap();
    assert_eq!(path, root.join("dependency_report.md"));

    let set = ArtifactRepository::new(root).load(3);
    let report = Report::from_artifacts(&set);
    assert_eq!(report.sections.len(), 2);

    let git = report.section(GIT_SECTION).unwrap();
    assert_eq!(git.rows.len(), 2);
    assert_eq!(git.rows[0][2], "a3370119");
    assert_eq!(git.rows[1][3], "No tag found");

    let hash = report.section(HASH_SECTION).unwrap();
    assert_eq!(hash.rows.len(), 3);
    // name from the directory, hyphen normalized
    assert_eq!(hash.rows[0][0], "z_lib");
    assert_eq!(hash.rows[0][1], "1.2.13");
    assert_eq!(hash.rows[0][6], "1");
    assert_eq!(hash.rows[2][5], "N/A");

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(reporter.reports.borrow().as_slice(), &[written.clone()]);
    assert!(written.starts_with("# Dependency Report\n"));
    assert!(written.contains("## Library Versions from Git Submodules"));
    assert!(!written.contains("## Failed Libraries"));
}

#[test]
fn nothing_to_report_writes_no_file() {
    let temp = tempfile::tempdir().unwrap();
    fs::create_dir_all(temp.path().join("empty")).unwrap();

    let result = generate_report(temp.path(), &ScanConfig::default(), &SilentReporter).unwrap();
    assert!(result.is_none());
    assert!(!temp.path().join("dependency_report.md").exists());
}

#[test]
fn missing_root_is_an_input_error() {
    let temp = tempfile::tempdir().unwrap();
    let missing = temp.path().join("nope");

    let cascade = cascade(NoGit, StubIdentifier::answering(None));
    assert!(cascade.process_root(&missing, &SilentReporter).is_err());
    assert!(generate_report(&missing, &ScanConfig::default(), &SilentReporter).is_err());
    assert!(!missing.exists());
}

#[test]
fn auto_detect_scans_children_of_third_party_dirs() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    write_file(&root.join("src/main.cpp"), "int main() {}\n");
    write_file(&root.join("third_party/zlib/inflate.c"), "int x;\n");
    write_file(&root.join("engine/deps/imgui/imgui.h"), "#pragma once\n");

    let identifier = StubIdentifier::answering(None);
    let cascade = cascade(NoGit, identifier.clone());
    let summary = cascade.process_third_party(root, &SilentReporter).unwrap();

    let mut names: Vec<_> = summary.outcomes.iter().map(|o| o.name.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["imgui", "zlib"]);
    assert!(root.join("third_party/zlib/zlib_no_git_info.json").exists());
    assert!(!root.join("third_party/third_party_no_git_info.json").exists());
}

#[test]
fn absolute_report_file_is_rejected() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().join("vendor");
    write_file(&root.join("zlib/inflate.c"), "int x;\n");
    let outside = temp.path().join("outside.md");

    let config = ScanConfig {
        report_file: outside.clone(),
        ..ScanConfig::default()
    };
    let reporter = RecordingReporter::default();
    let result = generate_report(&root, &config, &reporter);

    assert!(matches!(result, Err(ScanError::Config(_))));
    assert!(!outside.exists());
    assert!(reporter.reports.borrow().is_empty());
}
