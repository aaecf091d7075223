use tabled::{Table, Tabled, settings::Style};
use vendorscope_api::{GitInfo, LibraryVersionRecord, ScanReporter, VersionMatch};
use vendorscope_core::cascade::ScanSummary;

/// Prints the rendered report to stdout.
pub struct ConsoleReporter {
    pub echo_report: bool,
}

impl ScanReporter for ConsoleReporter {
    fn report(&self, markdown: &str) {
        if self.echo_report {
            println!("{markdown}");
        }
    }
}

#[derive(Tabled)]
struct OutcomeRow {
    #[tabled(rename = "Library")]
    name: String,
    #[tabled(rename = "Git")]
    git: &'static str,
    #[tabled(rename = "Files")]
    files: usize,
    #[tabled(rename = "Hash Match")]
    hash: &'static str,
}

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "Version")]
    version: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Repository")]
    repository: String,
    #[tabled(rename = "Tag")]
    tag: String,
}

#[derive(Tabled)]
struct SubmoduleRow {
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Commit")]
    commit: String,
    #[tabled(rename = "Tag")]
    tag: String,
    #[tabled(rename = "Repository")]
    repository: String,
}

pub fn print_summary(summary: &ScanSummary) {
    if summary.outcomes.is_empty() {
        println!("No library directories processed.");
        return;
    }

    let rows: Vec<OutcomeRow> = summary
        .outcomes
        .iter()
        .map(|o| OutcomeRow {
            name: o.name.clone(),
            git: o.git.label(),
            files: o.files_fingerprinted,
            hash: if o.hash_recorded { "yes" } else { "no" },
        })
        .collect();

    println!("{}", Table::new(rows).with(Style::psql()));
    println!(
        "Processed {} directories, {} identified by file hashes.",
        summary.outcomes.len(),
        summary.hash_recorded()
    );
}

pub fn print_matches(matches: &[VersionMatch]) {
    let rows: Vec<MatchRow> = matches
        .iter()
        .map(|m| MatchRow {
            version: m.version.clone(),
            score: m.score.to_string(),
            repository: m.repository_address.clone(),
            tag: m.tag.clone(),
        })
        .collect();
    println!("{}", Table::new(rows).with(Style::psql()));
}

pub fn print_git_record(record: &LibraryVersionRecord) {
    match record {
        LibraryVersionRecord::GitResolved(GitInfo { name, submodules }) => {
            println!("{name}: {} submodule(s)", submodules.len());
            let rows: Vec<SubmoduleRow> = submodules
                .iter()
                .map(|s| SubmoduleRow {
                    path: s.path.clone(),
                    commit: s.short_commit(),
                    tag: s.tag_display().to_string(),
                    repository: s.repository_display().to_string(),
                })
                .collect();
            println!("{}", Table::new(rows).with(Style::psql()));
        }
        LibraryVersionRecord::NoGitRepository(absence)
        | LibraryVersionRecord::NoSubmodules(absence) => {
            println!("{}: {}", absence.name, absence.reason);
        }
        other => println!("{}: {}", other.name(), other.kind().label()),
    }
}
