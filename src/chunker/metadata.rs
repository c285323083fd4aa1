use crate::loader::SourceDocument;
use serde::Serialize;
use std::collections::BTreeMap;

/// A boundary-aligned piece of one source document, ready for downstream
/// prompt assembly.
#[derive(Debug, Clone, Serialize)]
pub struct Chunk {
    pub content: String,
    pub metadata: ChunkMetadata,
}

/// Position and provenance of a chunk within its document.
#[derive(Debug, Clone, Serialize)]
pub struct ChunkMetadata {
    /// Identity of the owning document (lowercase stem).
    pub document_name: String,
    /// Classified ABAP object type of the whole document.
    pub document_type: String,
    /// Token count of the whole document.
    pub document_tokens: usize,
    /// 1-based position within the document's chunk sequence.
    pub chunk_index: usize,
    /// Deterministic id: `{document_name}_chunk_{chunk_index}`.
    pub chunk_id: String,
    /// Token count of this chunk's content.
    pub chunk_token_count: usize,
    pub is_first_chunk: bool,
    pub is_last_chunk: bool,
    pub is_single_chunk: bool,
    /// Provenance bag inherited from the load step (e.g. the source path).
    pub origin: BTreeMap<String, String>,
}

/// Decorate split pieces with per-chunk metadata.
///
/// Indices are contiguous starting at 1; the boundary flags are relative to
/// the final piece count.
pub fn enrich<F>(
    document: &SourceDocument,
    document_type: &str,
    document_tokens: usize,
    pieces: Vec<String>,
    token_counter: &F,
) -> Vec<Chunk>
where
    F: Fn(&str) -> usize,
{
    let total = pieces.len();
    pieces
        .into_iter()
        .enumerate()
        .map(|(i, content)| {
            let chunk_index = i + 1;
            let chunk_token_count = token_counter(&content);
            Chunk {
                metadata: ChunkMetadata {
                    document_name: document.identity.clone(),
                    document_type: document_type.to_string(),
                    document_tokens,
                    chunk_index,
                    chunk_id: format!("{}_chunk_{}", document.identity, chunk_index),
                    chunk_token_count,
                    is_first_chunk: chunk_index == 1,
                    is_last_chunk: chunk_index == total,
                    is_single_chunk: total == 1,
                    origin: document.origin.clone(),
                },
                content,
            }
        })
        .collect()
}
