pub mod artifact;
pub mod cascade;
pub mod config;
pub mod discovery;
pub mod error;
pub mod fingerprint;
pub mod git;
pub mod identify;
pub mod logging;
pub mod report;

pub use error::{Result, ScanError};
