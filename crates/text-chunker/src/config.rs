use serde::{Deserialize, Serialize};

use crate::error::{ChunkerError, Result};

/// Configuration for text chunking behavior
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChunkerConfig {
    /// Target maximum characters per chunk before boundary adjustment
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Characters reused as the start of the next chunk
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,

    /// Forward search window for a paragraph break past the target cut
    #[serde(default = "default_paragraph_window")]
    pub paragraph_window: usize,

    /// Forward search window for a space/tab fallback past the target cut
    #[serde(default = "default_word_window")]
    pub word_window: usize,
}

fn default_chunk_size() -> usize {
    1000
}

fn default_chunk_overlap() -> usize {
    200
}

fn default_paragraph_window() -> usize {
    200
}

fn default_word_window() -> usize {
    100
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
            paragraph_window: default_paragraph_window(),
            word_window: default_word_window(),
        }
    }
}

impl ChunkerConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(ChunkerError::invalid_config("chunk_size must be > 0"));
        }

        if self.chunk_overlap >= self.chunk_size {
            return Err(ChunkerError::invalid_config(format!(
                "chunk_overlap ({}) must be smaller than chunk_size ({})",
                self.chunk_overlap, self.chunk_size
            )));
        }

        Ok(())
    }
}
