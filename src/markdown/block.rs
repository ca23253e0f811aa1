//! Display blocks produced by the markdown renderer.

/// Heading rank supported by the renderer.
///
/// Only three ranks exist; `####` and deeper lines are not headings and fall
/// through to paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Returns numeric rank (1 for `H1`).
    pub fn rank(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

/// A run of text within a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    PlainText(String),
    Bold(String),
}

impl InlineSpan {
    /// Returns span text without any formatting.
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::PlainText(value) | InlineSpan::Bold(value) => value,
        }
    }
}

/// Ordered spans making up one line of block text.
pub type InlineSequence = Vec<InlineSpan>;

/// One structural unit of rendered content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        level: HeadingLevel,
        text: InlineSequence,
    },
    List {
        items: Vec<InlineSequence>,
    },
    Rule,
    Paragraph {
        text: InlineSequence,
    },
}

/// Concatenates span text, dropping bold markers.
pub fn plain_text(spans: &[InlineSpan]) -> String {
    spans.iter().map(InlineSpan::text).collect()
}
