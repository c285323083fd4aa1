//! Recursive, boundary-seeking text splitting with per-chunk metadata.

mod metadata;
mod splitter;


pub use metadata::{enrich, Chunk, ChunkMetadata};
pub use splitter::Splitter;

/// Rough token estimate for callers without a real tokenizer: one token per
/// four characters, at least one for non-empty text.
pub fn approx_tokens(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    (text.len() / 4).max(1)
}
