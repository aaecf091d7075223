use crate::console::{ConsoleReporter, print_summary};
use std::path::PathBuf;
use tracing::info;
use vendorscope_core::config::ScanConfig;
use vendorscope_core::report::generate_report;

/// `scan` and `process`: run the cascade under `root`, then optionally
/// aggregate the artifacts into the report.
pub fn run(
    root: PathBuf,
    auto_detect: bool,
    config: ScanConfig,
    write_report: bool,
) -> anyhow::Result<()> {
    let cascade = vendorscope_runtime::build_default_cascade(config)?;
    let progress = ConsoleReporter { echo_report: false };

    let summary = if auto_detect {
        cascade.process_third_party(&root, &progress)?
    } else {
        cascade.process_root(&root, &progress)?
    };
    print_summary(&summary);

    if !write_report {
        return Ok(());
    }

    info!("Generating dependency report...");
    let console = ConsoleReporter { echo_report: true };
    match generate_report(&root, cascade.config(), &console)? {
        Some(path) => println!("Report written to {}", path.display()),
        None => println!("No artifacts found under {}; no report written.", root.display()),
    }
    Ok(())
}
