use serde::{Deserialize, Serialize};

/// A contiguous slice of a source document, sized for embedding and indexing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextChunk {
    /// The chunk's text
    pub content: String,

    /// Start offset into the chunked text, in characters (inclusive)
    pub start_index: usize,

    /// End offset into the chunked text, in characters (exclusive)
    pub end_index: usize,

    /// 0-based position among the chunks produced for one document
    pub chunk_index: usize,

    /// Number of whitespace-delimited tokens in `content`
    pub word_count: usize,
}

impl TextChunk {
    /// Create a chunk, deriving `word_count` from the content
    #[must_use]
    pub fn new(content: String, start_index: usize, end_index: usize, chunk_index: usize) -> Self {
        let word_count = count_words(&content);
        Self {
            content,
            start_index,
            end_index,
            chunk_index,
            word_count,
        }
    }

    /// Build a chunk from a character span of the source document
    pub(crate) fn from_span(chars: &[char], start: usize, end: usize, chunk_index: usize) -> Self {
        let content: String = chars[start..end].iter().collect();
        Self::new(content, start, end, chunk_index)
    }

    /// Chunk length in characters
    #[must_use]
    pub const fn char_count(&self) -> usize {
        self.end_index - self.start_index
    }

    /// Check if the chunk covers a character offset of the source document
    #[must_use]
    pub const fn contains_offset(&self, offset: usize) -> bool {
        offset >= self.start_index && offset < self.end_index
    }
}

/// Count whitespace-delimited tokens in a piece of text
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   \t\n"), 0);
        assert_eq!(count_words("one"), 1);
        assert_eq!(count_words("one two three"), 3);
        assert_eq!(count_words("  spaced\tout\n\nwords  "), 3);
    }

    #[test]
    fn test_new_derives_word_count() {
        let chunk = TextChunk::new("alpha beta gamma".to_string(), 0, 16, 0);
        assert_eq!(chunk.word_count, 3);
        assert_eq!(chunk.char_count(), 16);
    }

    #[test]
    fn test_char_count_multibyte() {
        let chars: Vec<char> = "短いテキスト".chars().collect();
        let chunk = TextChunk::from_span(&chars, 0, chars.len(), 0);
        assert_eq!(chunk.char_count(), 6);
        assert_eq!(chunk.content, "短いテキスト");
    }

    #[test]
    fn test_contains_offset() {
        let chunk = TextChunk::new("abcde".to_string(), 10, 15, 2);
        assert!(chunk.contains_offset(10));
        assert!(chunk.contains_offset(14));
        assert!(!chunk.contains_offset(9));
        assert!(!chunk.contains_offset(15));
    }

    #[test]
    fn test_serialized_field_names() {
        let chunk = TextChunk::new("hello world".to_string(), 0, 11, 0);
        let json = serde_json::to_value(&chunk).unwrap();
        assert_eq!(json["content"], "hello world");
        assert_eq!(json["start_index"], 0);
        assert_eq!(json["end_index"], 11);
        assert_eq!(json["chunk_index"], 0);
        assert_eq!(json["word_count"], 2);
    }
}
