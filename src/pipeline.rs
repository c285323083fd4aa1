//! End-to-end document preparation: load, classify, split, enrich.
//!
//! Documents are processed one at a time; each document's classification and
//! chunk set depend only on that document plus the static tables, so results
//! are independent across documents.

use crate::chunker::{enrich, Chunk, Splitter};
use crate::classifier::Classifier;
use crate::language::SEPARATORS;
use crate::loader::{self, SkippedFile};
use log::{debug, info};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Loader(#[from] loader::LoaderError),

    #[error("invalid taxonomy tables: {0}")]
    Taxonomy(#[from] crate::classifier::TaxonomyError),

    #[error("invalid separator pattern: {0}")]
    Separator(#[from] regex::Error),
}

/// Chunked corpus keyed by document identity, plus the files that could not
/// be read. An empty map is a valid "nothing to process" outcome.
#[derive(Debug, Default)]
pub struct ProcessOutcome {
    pub documents: BTreeMap<String, Vec<Chunk>>,
    pub skipped: Vec<SkippedFile>,
}

/// Caller-owned pipeline instance holding the validated static
/// configuration: the classifier tables and the compiled separator list.
pub struct Pipeline {
    classifier: Classifier,
    splitter: Splitter,
    extension: String,
}

impl Pipeline {
    /// Build a pipeline over the compiled-in ABAP configuration.
    pub fn new(extension: impl Into<String>) -> Result<Self, PipelineError> {
        Ok(Self {
            classifier: Classifier::new()?,
            splitter: Splitter::new(SEPARATORS)?,
            extension: extension.into(),
        })
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Load every matching file under `root` and turn each into an ordered
    /// chunk sequence.
    ///
    /// The per-document chunk budget is the smaller of the document's own
    /// token count and `chunk_ceiling`. `token_counter` must be total and
    /// deterministic; its results are not cached here.
    pub fn process<F>(
        &self,
        root: &Path,
        chunk_ceiling: usize,
        token_counter: F,
    ) -> Result<ProcessOutcome, PipelineError>
    where
        F: Fn(&str) -> usize,
    {
        let loaded = loader::load(root, &self.extension)?;
        info!(
            "loaded {} document(s) from {} ({} skipped)",
            loaded.documents.len(),
            root.display(),
            loaded.skipped.len()
        );

        let mut documents = BTreeMap::new();
        for (index, document) in loaded.documents.iter().enumerate() {
            info!("processing document no-{}: {}", index + 1, document.identity);

            let document_type = self.classifier.classify(&document.content);
            let document_tokens = token_counter(&document.content);
            debug!(
                "{}: type {}, {} tokens",
                document.identity, document_type, document_tokens
            );

            let budget = document_tokens.min(chunk_ceiling);
            let pieces = self.splitter.split(&document.content, budget);
            let chunks = enrich(
                document,
                document_type,
                document_tokens,
                pieces,
                &token_counter,
            );
            debug!("{}: {} chunk(s)", document.identity, chunks.len());

            documents.insert(document.identity.clone(), chunks);
        }

        Ok(ProcessOutcome {
            documents,
            skipped: loaded.skipped,
        })
    }
}
