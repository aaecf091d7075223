//! HTTP client for the version-identification service.

use crate::config::ScanConfig;
use crate::error::{Result, ScanError};
use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, error, info};
use vendorscope_api::{FingerprintSet, ServiceResponse, VersionIdentifier};

/// Blocking client for an OSV-style `determineversion` endpoint.
///
/// No request timeout is set: a hung call stalls the run, matching the rest
/// of the synchronous pipeline.
pub struct OsvClient {
    client: Client,
    endpoint: String,
}

impl OsvClient {
    pub fn new(config: &ScanConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(None)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        Self::new(&ScanConfig {
            endpoint: endpoint.into(),
            ..ScanConfig::default()
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send the fingerprint set and return the decoded response document.
    pub fn query(&self, set: &FingerprintSet) -> Result<Value> {
        debug!(
            "Sending {} file hashes for {} to {}",
            set.len(),
            set.library_name,
            self.endpoint
        );

        let response = self.client.post(&self.endpoint).json(set).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::Status {
                status: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }

        Ok(response.json::<Value>()?)
    }
}

impl VersionIdentifier for OsvClient {
    fn identify(&self, set: &FingerprintSet) -> Option<Value> {
        match self.query(set) {
            Ok(document) => Some(document),
            Err(e) => {
                error!("Error querying OSV API: {}", e);
                None
            }
        }
    }
}

/// Log every candidate in a response document.
pub fn log_matches(document: &Value) {
    let response = match ServiceResponse::from_value(document) {
        Ok(response) => response,
        Err(e) => {
            debug!("Response has no readable matches: {}", e);
            return;
        }
    };

    info!("Potential library matches:");
    for m in &response.matches {
        info!(
            "Score: {} | Version: {} | Repository: {} | Tag: {}",
            m.score, m.repo_info.version, m.repo_info.address, m.repo_info.tag
        );
        match &m.minimum_file_matches {
            Some(n) => info!("Minimum file matches: {}", n),
            None => info!("Minimum file matches: N/A"),
        }
        if let Some(n) = &m.estimated_diff_files {
            info!("Estimated different files: {}", n);
        }
    }
}
