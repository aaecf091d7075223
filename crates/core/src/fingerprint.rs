//! Content fingerprinting of library source trees.

use crate::config::{DigestAlgorithm, SOURCE_EXTENSIONS};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use md5::{Digest, Md5};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Component, Path};
use tracing::{debug, error};
use vendorscope_api::{FileFingerprint, FingerprintSet};
use walkdir::{DirEntry, WalkDir};
use xxhash_rust::xxh3::Xxh3;

const CHUNK_SIZE: usize = 8 * 1024;

pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// Whether any recognized source file exists anywhere below `root`.
pub fn contains_source_files(root: &Path) -> bool {
    source_files(root).next().is_some()
}

/// Recognized source files under `root`, in a stable (file-name sorted) walk order.
fn source_files(root: &Path) -> impl Iterator<Item = DirEntry> + '_ {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("Skipping unreadable entry under {}: {}", root.display(), e);
                None
            }
        })
        .filter(|e| {
            let file = e.file_type().is_file() || (e.path_is_symlink() && e.path().is_file());
            file && is_source_file(e.path())
        })
}

/// `path` relative to `root`, joined with `/` regardless of platform.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

enum StreamHasher {
    Md5(Md5),
    Xxh3(Box<Xxh3>),
}

impl StreamHasher {
    fn new(algorithm: DigestAlgorithm) -> Self {
        match algorithm {
            DigestAlgorithm::Md5 => StreamHasher::Md5(Md5::new()),
            DigestAlgorithm::Xxh3_128 => StreamHasher::Xxh3(Box::new(Xxh3::new())),
        }
    }

    fn update(&mut self, chunk: &[u8]) {
        match self {
            StreamHasher::Md5(h) => h.update(chunk),
            StreamHasher::Xxh3(h) => h.update(chunk),
        }
    }

    fn finish(self) -> [u8; 16] {
        match self {
            StreamHasher::Md5(h) => {
                let mut out = [0u8; 16];
                out.copy_from_slice(&h.finalize());
                out
            }
            StreamHasher::Xxh3(h) => h.digest128().to_be_bytes(),
        }
    }
}

/// Computes per-file digests and packages them as a [`FingerprintSet`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Fingerprinter {
    algorithm: DigestAlgorithm,
}

impl Fingerprinter {
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Base64 digest of everything `reader` yields, read in fixed-size chunks.
    pub fn digest_reader<R: Read>(&self, mut reader: R) -> io::Result<String> {
        let mut hasher = StreamHasher::new(self.algorithm);
        let mut buf = [0u8; CHUNK_SIZE];
        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            hasher.update(&buf[..n]);
        }
        Ok(STANDARD.encode(hasher.finish()))
    }

    pub fn digest_file(&self, path: &Path) -> io::Result<String> {
        self.digest_reader(File::open(path)?)
    }

    /// Walk the whole tree under `root` and fingerprint every source file.
    ///
    /// A file that cannot be read is logged and left out.
    pub fn fingerprint(&self, root: &Path, name: &str) -> FingerprintSet {
        collect_fingerprints(root, name, |path| self.digest_file(path))
    }
}

fn collect_fingerprints<F>(root: &Path, name: &str, digest: F) -> FingerprintSet
where
    F: Fn(&Path) -> io::Result<String>,
{
    let mut set = FingerprintSet::new(name);

    for entry in source_files(root) {
        let path = entry.path();
        let relative = relative_path(root, path);
        match digest(path) {
            Ok(hash) => {
                debug!("Processed file: {}", relative);
                set.files.push(FileFingerprint {
                    digest: hash,
                    relative_path: relative,
                });
            }
            Err(e) => error!("Error processing {}: {}", path.display(), e),
        }
    }

    debug!("Total files processed: {}", set.len());
    set
}
