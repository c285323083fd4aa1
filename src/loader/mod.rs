//! Directory loading of ABAP source files.
//!
//! Walks a root directory recursively, reads every file with a matching
//! extension as text, and collects the rest of the story in an explicit
//! skip list instead of swallowing failures. Only a missing or unopenable
//! root is fatal: that is a configuration error, not an empty corpus.

mod error;

#[cfg(test)]
mod tests;

pub use error::LoaderError;

use chardetng::EncodingDetector;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One loaded source file. Immutable after load.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// Stable name derived from the file path: lowercase stem, no extension.
    pub identity: String,
    /// Full decoded text content.
    pub content: String,
    /// Opaque provenance bag, seeded with the `source` path.
    pub origin: BTreeMap<String, String>,
}

impl SourceDocument {
    fn new(path: &Path, content: String) -> Self {
        let identity = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_lowercase())
            .unwrap_or_else(|| "unknown".to_string());

        let mut origin = BTreeMap::new();
        origin.insert("source".to_string(), path.display().to_string());

        Self {
            identity,
            content,
            origin,
        }
    }
}

/// Diagnostic record for a file that could not be loaded.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of loading a directory: zero or more documents plus the skip list.
///
/// An empty `documents` list is a valid outcome meaning "nothing to
/// process", not an error.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub documents: Vec<SourceDocument>,
    pub skipped: Vec<SkippedFile>,
}

/// Recursively load all files under `root` whose extension matches
/// `extension` (case-insensitive, without the dot).
///
/// Unreadable files are skipped and recorded; a missing or non-directory
/// `root` fails hard with [`LoaderError`].
pub fn load(root: &Path, extension: &str) -> Result<LoadOutcome, LoaderError> {
    if !root.exists() {
        return Err(LoaderError::RootMissing(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(LoaderError::NotADirectory(root.to_path_buf()));
    }

    let mut outcome = LoadOutcome::default();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                let path = error
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                warn!("skipping {}: {}", path.display(), error);
                outcome.skipped.push(SkippedFile {
                    path,
                    reason: error.to_string(),
                });
                continue;
            }
        };

        if !entry.file_type().is_file() || !has_extension(entry.path(), extension) {
            continue;
        }

        match read_text(entry.path()) {
            Ok(content) => {
                debug!("loaded {}", entry.path().display());
                outcome
                    .documents
                    .push(SourceDocument::new(entry.path(), content));
            }
            Err(error) => {
                warn!("skipping {}: {}", entry.path().display(), error);
                outcome.skipped.push(SkippedFile {
                    path: entry.path().to_path_buf(),
                    reason: error.to_string(),
                });
            }
        }
    }

    Ok(outcome)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}

/// Read a file as text: strict UTF-8 first, autodetected encoding on
/// failure. The fallback decode is total, so only the read itself can fail.
fn read_text(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(error) => {
            let bytes = error.into_bytes();
            let mut detector = EncodingDetector::new();
            detector.feed(&bytes, true);
            let encoding = detector.guess(None, true);
            debug!(
                "{}: not UTF-8, decoding as {}",
                path.display(),
                encoding.name()
            );
            let (text, _, _) = encoding.decode(&bytes);
            Ok(text.into_owned())
        }
    }
}
