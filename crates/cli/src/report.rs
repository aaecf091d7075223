use crate::console::ConsoleReporter;
use std::path::PathBuf;
use vendorscope_core::config::ScanConfig;
use vendorscope_core::report::generate_report;

pub fn run(root: PathBuf, output: PathBuf) -> anyhow::Result<()> {
    let config = ScanConfig {
        report_file: output,
        ..ScanConfig::default()
    };
    let reporter = ConsoleReporter { echo_report: true };

    match generate_report(&root, &config, &reporter)? {
        Some(path) => eprintln!("Report written to {}", path.display()),
        None => anyhow::bail!("no artifacts found under {}", root.display()),
    }
    Ok(())
}
