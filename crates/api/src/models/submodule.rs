use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Persisted in place of a missing tag.
pub const NO_TAG_FOUND: &str = "No tag found";
/// Persisted in place of a missing `origin` URL.
pub const NO_REMOTE_URL_FOUND: &str = "No remote URL found";

/// Author metadata of the commit a submodule is pinned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitInfo {
    pub author_name: String,
    pub author_email: String,
    pub author_date: String,
}

/// One git submodule inside a library directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmoduleRecord {
    pub path: String,
    /// As reported by `git submodule status`, minus the state marker.
    /// May be abbreviated.
    #[serde(rename = "commit")]
    pub commit_hash: String,
    #[serde(default, with = "tag_sentinel")]
    pub tag: Option<String>,
    #[serde(rename = "repository", default, with = "remote_sentinel")]
    pub repository_url: Option<String>,
    #[serde(rename = "commit_info", default)]
    pub commit_author: Option<CommitInfo>,
}

impl SubmoduleRecord {
    /// First eight characters of the commit, for display.
    pub fn short_commit(&self) -> String {
        self.commit_hash.chars().take(8).collect()
    }

    pub fn tag_display(&self) -> &str {
        self.tag.as_deref().unwrap_or(NO_TAG_FOUND)
    }

    pub fn repository_display(&self) -> &str {
        self.repository_url.as_deref().unwrap_or(NO_REMOTE_URL_FOUND)
    }
}

fn serialize_or<S: Serializer>(
    value: &Option<String>,
    sentinel: &str,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_deref().unwrap_or(sentinel))
}

fn deserialize_or<'de, D: Deserializer<'de>>(
    deserializer: D,
    sentinel: &str,
) -> Result<Option<String>, D::Error> {
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|v| v != sentinel))
}

mod tag_sentinel {
    use super::*;

    pub fn serialize<S: Serializer>(v: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
        serialize_or(v, NO_TAG_FOUND, s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        deserialize_or(d, NO_TAG_FOUND)
    }
}

mod remote_sentinel {
    use super::*;

    pub fn serialize<S: Serializer>(v: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
        serialize_or(v, NO_REMOTE_URL_FOUND, s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        deserialize_or(d, NO_REMOTE_URL_FOUND)
    }
}
