use std::path::Path;

use crate::boundary;
use crate::config::ChunkerConfig;
use crate::error::Result;
use crate::section;
use crate::types::TextChunk;

/// Main chunker interface for processing extracted document text
pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    /// Create a new chunker with configuration
    #[must_use]
    pub fn new(config: ChunkerConfig) -> Self {
        config
            .validate()
            .expect("Invalid chunker configuration provided");
        Self { config }
    }

    /// Split a document into overlapping, boundary-respecting chunks.
    ///
    /// A document that fits within `chunk_size` characters comes back as a
    /// single chunk (empty input included). Longer documents are cut near
    /// `chunk_size`, with each cut nudged forward to the nearest paragraph or
    /// word break, and the last `chunk_overlap` characters of every chunk
    /// repeated at the start of the next one.
    #[must_use]
    pub fn chunk_with_overlap(&self, document: &str) -> Vec<TextChunk> {
        let chars: Vec<char> = document.chars().collect();
        let chunks = self.chunk_chars(&chars);
        log::debug!(
            "chunked {} chars into {} overlapping chunks",
            chars.len(),
            chunks.len()
        );
        chunks
    }

    /// Chunk analyzer output, keeping marked table/key-value/list blocks
    /// intact wherever they fit within a single chunk.
    ///
    /// The document is first split into sections along structural marker
    /// lines. Sections that fit within `chunk_size` become one chunk each;
    /// oversized sections fall back to overlap chunking. Offsets and chunk
    /// indices run globally across all sections.
    #[must_use]
    pub fn chunk_sectioned(&self, document: &str) -> Vec<TextChunk> {
        let sections = section::split_into_sections(document);
        if sections.is_empty() {
            // Blank input yields no sections; fall through to plain chunking
            // so both entry points agree on marker-free documents.
            return self.chunk_with_overlap(document);
        }

        let mut chunks: Vec<TextChunk> = Vec::new();
        let mut global_offset = 0usize;

        for section in &sections {
            let section_chars: Vec<char> = section.content.chars().collect();
            let section_len = section_chars.len();

            if section_len <= self.config.chunk_size {
                log::trace!(
                    "{} section fits in one chunk ({section_len} chars)",
                    section.kind.as_str()
                );
                chunks.push(TextChunk::new(
                    section.content.clone(),
                    global_offset,
                    global_offset + section_len,
                    chunks.len(),
                ));
            } else {
                log::trace!(
                    "{} section exceeds chunk size ({section_len} chars), splitting",
                    section.kind.as_str()
                );
                for sub in self.chunk_chars(&section_chars) {
                    let chunk_index = chunks.len();
                    chunks.push(TextChunk {
                        start_index: global_offset + sub.start_index,
                        end_index: global_offset + sub.end_index,
                        chunk_index,
                        ..sub
                    });
                }
            }

            global_offset += section_len;
        }

        log::debug!(
            "chunked {} sections into {} chunks",
            sections.len(),
            chunks.len()
        );
        chunks
    }

    /// Chunk a file's contents with plain overlap chunking
    pub fn chunk_file(&self, path: impl AsRef<Path>) -> Result<Vec<TextChunk>> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        log::debug!("chunking file {} ({} bytes)", path.display(), content.len());
        Ok(self.chunk_with_overlap(&content))
    }

    fn chunk_chars(&self, chars: &[char]) -> Vec<TextChunk> {
        let total = chars.len();
        if total <= self.config.chunk_size {
            return vec![TextChunk::from_span(chars, 0, total, 0)];
        }

        let mut chunks = Vec::new();
        let mut start = 0usize;

        while start < total {
            let naive_end = start + self.config.chunk_size;
            let end = if naive_end >= total {
                total
            } else {
                boundary::adjust_end(
                    chars,
                    naive_end,
                    self.config.paragraph_window,
                    self.config.word_window,
                )
            };
            debug_assert!(end > start, "chunk boundary must advance");

            chunks.push(TextChunk::from_span(chars, start, end, chunks.len()));

            if end >= total {
                break;
            }

            // Clamp keeps the cursor moving even if overlap swallows the
            // whole step.
            start = end.saturating_sub(self.config.chunk_overlap).max(start + 1);
        }

        chunks
    }

    /// Get configuration
    #[must_use]
    pub const fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Summarize chunking results
    #[must_use]
    pub fn stats(chunks: &[TextChunk]) -> ChunkingStats {
        ChunkingStats {
            total_chunks: chunks.len(),
            total_chars: chunks.iter().map(TextChunk::char_count).sum(),
            total_words: chunks.iter().map(|c| c.word_count).sum(),
            avg_chars_per_chunk: if chunks.is_empty() {
                0
            } else {
                chunks.iter().map(TextChunk::char_count).sum::<usize>() / chunks.len()
            },
            min_chars: chunks.iter().map(TextChunk::char_count).min().unwrap_or(0),
            max_chars: chunks.iter().map(TextChunk::char_count).max().unwrap_or(0),
        }
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new(ChunkerConfig::default())
    }
}

/// Statistics about chunking results
#[derive(Debug, Clone)]
pub struct ChunkingStats {
    pub total_chunks: usize,
    pub total_chars: usize,
    pub total_words: usize,
    pub avg_chars_per_chunk: usize,
    pub min_chars: usize,
    pub max_chars: usize,
}

impl std::fmt::Display for ChunkingStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunks: {} | Chars: {} | Words: {} | Avg: {} | Range: {}-{}",
            self.total_chunks,
            self.total_chars,
            self.total_words,
            self.avg_chars_per_chunk,
            self.min_chars,
            self.max_chars
        )
    }
}
