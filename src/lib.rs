// Public API exports
pub mod chunker;
pub mod classifier;
pub mod config;
pub mod language;
pub mod loader;
pub mod pipeline;

// Re-export main types for convenience
pub use chunker::{approx_tokens, enrich, Chunk, ChunkMetadata, Splitter};
pub use classifier::{Classifier, TaxonomyError};
pub use config::Config;
pub use language::{FALLBACK_CATEGORY, FALLBACK_TYPE, SEPARATORS};
pub use loader::{load, LoadOutcome, LoaderError, SkippedFile, SourceDocument};
pub use pipeline::{Pipeline, PipelineError, ProcessOutcome};
