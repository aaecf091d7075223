use std::path::Path;

/// Runs version-control commands inside a working directory.
pub trait VcsRunner {
    /// Execute the tool with `args` in `dir`.
    ///
    /// Returns the captured stdout when the process exits successfully and
    /// `None` for a non-zero exit or a failure to spawn. A `None` answer means
    /// "unknown", never an error.
    fn run(&self, dir: &Path, args: &[&str]) -> Option<String>;
}
