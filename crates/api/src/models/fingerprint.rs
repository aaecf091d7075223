use serde::{Deserialize, Serialize};

/// Identity of one source file inside a library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFingerprint {
    /// Base64 encoded 128-bit content digest
    #[serde(rename = "hash")]
    pub digest: String,
    /// Path relative to the library root, always `/`-separated
    #[serde(rename = "file_path")]
    pub relative_path: String,
}

/// All fingerprints of one library, in the shape the identification service expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerprintSet {
    #[serde(rename = "name")]
    pub library_name: String,
    #[serde(rename = "file_hashes")]
    pub files: Vec<FileFingerprint>,
}

impl FingerprintSet {
    pub fn new(library_name: impl Into<String>) -> Self {
        Self {
            library_name: library_name.into(),
            files: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
