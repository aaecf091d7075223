use crate::console::{ConsoleReporter, print_matches};
use std::path::PathBuf;
use vendorscope_api::{LibraryDirectory, LibraryVersionRecord};
use vendorscope_core::config::ScanConfig;
use vendorscope_core::error::ScanError;

/// Content-hash identification for a single library directory.
pub fn run(path: PathBuf, config: ScanConfig) -> anyhow::Result<()> {
    if !path.is_dir() {
        return Err(ScanError::InvalidRoot(path).into());
    }

    let cascade = vendorscope_runtime::build_default_cascade(config)?;
    let library = LibraryDirectory::new(path);
    let reporter = ConsoleReporter { echo_report: false };

    let (files, record) = cascade.identify_by_hash(&library, &reporter);
    println!("Fingerprinted {files} source file(s) in {}", library.name);

    match record {
        Some(LibraryVersionRecord::HashResolved(resolution)) => {
            print_matches(&resolution.top_matches);
        }
        _ => println!("No version matches found for {}", library.name),
    }
    Ok(())
}
