//! Line-oriented splitting of analyzer output into structural sections.
//!
//! The document-analysis step upstream marks tables, key-value runs, and
//! lists with literal delimiter lines. Those blocks are semantically atomic,
//! so the chunker keeps each one intact whenever it fits inside a single
//! chunk instead of applying paragraph heuristics to its interior.

use serde::{Deserialize, Serialize};

/// Delimiter line opening a table block
pub const TABLE_MARKER: &str = "--- テーブル ---";

/// Delimiter line opening a key-value pair block
pub const KEY_VALUE_MARKER: &str = "--- キー・値ペア ---";

/// Delimiter line opening a list block
pub const LIST_MARKER: &str = "--- リスト ---";

/// Kind of structural block a section holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Free-running prose
    Text,
    /// Table block
    Table,
    /// Key-value pair block
    KeyValue,
    /// List block
    List,
}

impl SectionKind {
    /// Kind opened by a marker line, if any
    #[must_use]
    pub fn from_marker_line(line: &str) -> Option<Self> {
        if line.contains(TABLE_MARKER) {
            Some(Self::Table)
        } else if line.contains(KEY_VALUE_MARKER) {
            Some(Self::KeyValue)
        } else if line.contains(LIST_MARKER) {
            Some(Self::List)
        } else {
            None
        }
    }

    /// Get human-readable name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Table => "table",
            Self::KeyValue => "keyvalue",
            Self::List => "list",
        }
    }
}

/// A maximal run of lines between structural markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Block kind this section was tagged with
    pub kind: SectionKind,

    /// Section text, lines joined with `\n`
    pub content: String,
}

/// Split analyzer output into sections along marker lines.
///
/// A marker line closes the running section and opens a new one seeded with
/// the marker line itself; the closed section keeps the kind it was opened
/// under. Sections that are blank after trimming are dropped. Input without
/// markers comes back as a single `Text` section.
#[must_use]
pub fn split_into_sections(document: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();
    let mut kind = SectionKind::Text;

    for line in document.split('\n') {
        if let Some(next_kind) = SectionKind::from_marker_line(line) {
            flush(&mut sections, &mut buffer, kind);
            buffer.push(line);
            kind = next_kind;
        } else {
            buffer.push(line);
        }
    }
    flush(&mut sections, &mut buffer, kind);

    sections
}

fn flush(sections: &mut Vec<Section>, buffer: &mut Vec<&str>, kind: SectionKind) {
    if buffer.is_empty() {
        return;
    }

    let content = buffer.join("\n");
    buffer.clear();

    if content.trim().is_empty() {
        return;
    }
    sections.push(Section { kind, content });
}
