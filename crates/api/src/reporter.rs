use crate::models::{LibraryDirectory, LibraryVersionRecord};

/// Receives user-facing progress from the pipeline.
///
/// Components take a `&dyn ScanReporter` instead of writing to the console
/// directly, so a test can hand in a recorder and inspect what would have been
/// shown.
pub trait ScanReporter {
    /// A library directory is about to be processed.
    fn directory_started(&self, _dir: &LibraryDirectory) {}

    /// A strategy produced an outcome for a directory.
    fn record(&self, _record: &LibraryVersionRecord) {}

    /// The aggregated report has been rendered.
    fn report(&self, _markdown: &str) {}
}

/// Reporter that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl ScanReporter for SilentReporter {}
