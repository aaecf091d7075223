use crate::console::{ConsoleReporter, print_git_record};
use std::path::PathBuf;
use vendorscope_api::LibraryDirectory;
use vendorscope_core::config::ScanConfig;
use vendorscope_core::error::ScanError;

/// Submodule inspection for a single library directory.
pub fn run(path: PathBuf) -> anyhow::Result<()> {
    if !path.is_dir() {
        return Err(ScanError::InvalidRoot(path).into());
    }

    let cascade = vendorscope_runtime::build_default_cascade(ScanConfig::default())?;
    let library = LibraryDirectory::new(path);
    let record = cascade.identify_by_git(&library, &ConsoleReporter { echo_report: false });
    print_git_record(&record);
    Ok(())
}
