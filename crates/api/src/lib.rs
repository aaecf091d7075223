pub mod identify;
pub mod models;
pub mod reporter;
pub mod vcs;

// Re-export commonly used types
pub use identify::VersionIdentifier;
pub use models::*;
pub use reporter::{ScanReporter, SilentReporter};
pub use vcs::VcsRunner;
