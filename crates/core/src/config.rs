use crate::error::{Result, ScanError};
use std::path::PathBuf;
use vendorscope_api::DEFAULT_TOP_MATCHES;

/// Version-determination endpoint of the public OSV service.
pub const DEFAULT_ENDPOINT: &str = "https://api.osv.dev/v1experimental/determineversion";

pub const DEFAULT_REPORT_FILE: &str = "dependency_report.md";

/// File suffixes that count as C/C++ sources.
pub const SOURCE_EXTENSIONS: &[&str] = &["c", "cc", "h", "hh", "cpp", "hpp"];

/// Directory names (lowercase) that conventionally hold vendored code.
pub const THIRD_PARTY_DIR_NAMES: &[&str] = &[
    "3rdparty",
    "third-party",
    "third_party",
    "thirdparty",
    "external",
    "externals",
    "deps",
    "dependencies",
    "libs",
    "libraries",
];

/// Content hash used for file fingerprints. Both variants are 128 bits wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigestAlgorithm {
    /// What the public identification service indexes
    #[default]
    Md5,
    Xxh3_128,
}

impl std::str::FromStr for DigestAlgorithm {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "md5" => Ok(DigestAlgorithm::Md5),
            "xxh3" | "xxh3-128" | "xxh3_128" => Ok(DigestAlgorithm::Xxh3_128),
            other => Err(ScanError::Config(format!("unknown digest algorithm: {other}"))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub endpoint: String,
    pub user_agent: String,
    /// Also persist `{name}_hashes.json` next to each library
    pub debug: bool,
    pub digest: DigestAlgorithm,
    /// Report location, relative to the scanned root
    pub report_file: PathBuf,
    pub top_matches: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: format!("vendorscope/{}", env!("CARGO_PKG_VERSION")),
            debug: false,
            digest: DigestAlgorithm::default(),
            report_file: PathBuf::from(DEFAULT_REPORT_FILE),
            top_matches: DEFAULT_TOP_MATCHES,
        }
    }
}

impl ScanConfig {
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.endpoint)
            .map_err(|e| ScanError::Config(format!("invalid endpoint {}: {e}", self.endpoint)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ScanError::Config(format!(
                "endpoint must use http or https, got {}",
                url.scheme()
            )));
        }
        if self.top_matches == 0 {
            return Err(ScanError::Config("top_matches must be at least 1".to_string()));
        }
        if self.report_file.is_absolute() {
            return Err(ScanError::Config(format!(
                "report file must be relative to the scanned root: {}",
                self.report_file.display()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ScanConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let config = ScanConfig {
            endpoint: "ftp://example.com/determineversion".to_string(),
            ..ScanConfig::default()
        };
        assert!(matches!(config.validate(), Err(ScanError::Config(_))));
    }

    #[test]
    fn rejects_absolute_report_path() {
        let config = ScanConfig {
            report_file: std::env::temp_dir().join("report.md"),
            ..ScanConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn parses_digest_names() {
        assert_eq!("MD5".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Md5);
        assert_eq!("xxh3".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Xxh3_128);
        assert!("sha1".parse::<DigestAlgorithm>().is_err());
    }
}
