use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::cmp::Ordering;

/// Number of candidates kept from a service response.
pub const DEFAULT_TOP_MATCHES: usize = 3;

/// Placeholder rendered for optional numeric fields the service left out.
pub const NOT_AVAILABLE: &str = "N/A";

/// One ranked version candidate for a library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionMatch {
    pub version: String,
    /// Kept as the service sent it so `9` and `9.5` render unchanged
    pub score: Number,
    pub repository_address: String,
    pub tag: String,
    pub minimum_file_matches: Option<Number>,
    pub estimated_diff_files: Option<Number>,
}

impl VersionMatch {
    pub fn score_value(&self) -> f64 {
        self.score.as_f64().unwrap_or(0.0)
    }

    pub fn minimum_file_matches_display(&self) -> String {
        display_or_na(self.minimum_file_matches.as_ref())
    }

    pub fn estimated_diff_files_display(&self) -> String {
        display_or_na(self.estimated_diff_files.as_ref())
    }
}

fn display_or_na(value: Option<&Number>) -> String {
    value
        .map(|n| n.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Typed view over the identification service's response document.
///
/// Only the fields the pipeline reads are modelled; anything else in the
/// document is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceResponse {
    #[serde(default)]
    pub matches: Vec<ServiceMatch>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceMatch {
    #[serde(default = "zero")]
    pub score: Number,
    pub repo_info: RepoInfo,
    #[serde(default)]
    pub minimum_file_matches: Option<Number>,
    #[serde(default)]
    pub estimated_diff_files: Option<Number>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepoInfo {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub tag: String,
}

fn zero() -> Number {
    Number::from(0u8)
}

impl ServiceResponse {
    pub fn from_value(value: &Value) -> serde_json::Result<Self> {
        Self::deserialize(value)
    }

    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }

    /// The `limit` best candidates, highest score first.
    ///
    /// Equal scores keep the order in which the service listed them.
    pub fn top_matches(&self, limit: usize) -> Vec<VersionMatch> {
        let mut ranked: Vec<VersionMatch> = self.matches.iter().map(VersionMatch::from).collect();
        ranked.sort_by(|a, b| {
            b.score_value()
                .partial_cmp(&a.score_value())
                .unwrap_or(Ordering::Equal)
        });
        ranked.truncate(limit);
        ranked
    }
}

impl From<&ServiceMatch> for VersionMatch {
    fn from(m: &ServiceMatch) -> Self {
        Self {
            version: m.repo_info.version.clone(),
            score: m.score.clone(),
            repository_address: m.repo_info.address.clone(),
            tag: m.repo_info.tag.clone(),
            minimum_file_matches: m.minimum_file_matches.clone(),
            estimated_diff_files: m.estimated_diff_files.clone(),
        }
    }
}
