//! # Docport Text Chunker
//!
//! Overlap-aware text chunking for document-search ingestion.
//!
//! ## Philosophy
//!
//! The chunker turns one long blob of extracted document text into fragments
//! that:
//! - Stay near a fixed character budget so each fragment embeds well
//! - Break at paragraph or word boundaries instead of mid-word
//! - Repeat the tail of each fragment at the start of the next, so context
//!   spanning a cut survives retrieval
//! - Keep analyzer-marked tables, key-value runs, and lists intact when they
//!   fit inside a single fragment
//!
//! ## Architecture
//!
//! ```text
//! Extracted Text
//!     │
//!     ├──> Section Splitting (structural marker lines)
//!     │
//!     ├──> Overlap Chunking (whole document, or per oversized section)
//!     │    ├─> Naive cut at chunk_size characters
//!     │    ├─> Boundary adjustment (paragraph break, then word break)
//!     │    └─> Overlap carry-over into the next chunk
//!     │
//!     └──> TextChunk[] with global offsets and indices
//! ```
//!
//! ## Example
//!
//! ```rust
//! use docport_text_chunker::{Chunker, ChunkerConfig};
//!
//! let chunker = Chunker::new(ChunkerConfig::default());
//!
//! let chunks = chunker.chunk_with_overlap("短いテキスト");
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(chunks[0].end_index, 6);
//!
//! let chunks = chunker.chunk_with_overlap(&"長い文書です。 ".repeat(200));
//! for chunk in &chunks {
//!     println!("chunk {} [{}..{}]", chunk.chunk_index, chunk.start_index, chunk.end_index);
//! }
//! ```

mod boundary;
mod chunker;
mod config;
mod error;
mod section;
mod types;

pub use chunker::{Chunker, ChunkingStats};
pub use config::ChunkerConfig;
pub use error::{ChunkerError, Result};
pub use section::{
    split_into_sections, Section, SectionKind, KEY_VALUE_MARKER, LIST_MARKER, TABLE_MARKER,
};
pub use types::{count_words, TextChunk};
