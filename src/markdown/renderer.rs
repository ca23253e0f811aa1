//! Line oriented block renderer.

use super::block::{Block, HeadingLevel, InlineSequence};
use super::inline::tokenize;

/// Heading prefixes, checked deepest first so `### ` is never read as `# `.
const HEADING_MARKERS: [(&str, HeadingLevel); 3] = [
    ("### ", HeadingLevel::H3),
    ("## ", HeadingLevel::H2),
    ("# ", HeadingLevel::H1),
];

const LIST_MARKER: &str = "- ";
const RULE: &str = "---";

/// Classification of one trimmed source line.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Rule,
    Heading(HeadingLevel, &'a str),
    ListItem(&'a str),
    Text(&'a str),
}

impl<'a> Line<'a> {
    fn classify(line: &'a str) -> Self {
        if line.is_empty() {
            return Line::Blank;
        }
        if line == RULE {
            return Line::Rule;
        }
        for (marker, level) in HEADING_MARKERS {
            if let Some(rest) = line.strip_prefix(marker) {
                return Line::Heading(level, rest);
            }
        }
        if let Some(rest) = line.strip_prefix(LIST_MARKER) {
            return Line::ListItem(rest);
        }
        Line::Text(line)
    }
}

/// Block output plus the pending list accumulator.
///
/// An empty accumulator is the idle state; any pending items mean a list is
/// open and will be emitted by the next non-item line or by `finish`.
#[derive(Default)]
struct RenderState {
    blocks: Vec<Block>,
    pending_items: Vec<InlineSequence>,
}

impl RenderState {
    fn flush_list(&mut self) {
        if self.pending_items.is_empty() {
            return;
        }
        let items = std::mem::take(&mut self.pending_items);
        self.blocks.push(Block::List { items });
    }

    fn emit(&mut self, block: Block) {
        self.flush_list();
        self.blocks.push(block);
    }

    fn process(&mut self, line: Line<'_>) {
        match line {
            Line::Blank => self.flush_list(),
            Line::Rule => self.emit(Block::Rule),
            Line::Heading(level, rest) => self.emit(Block::Heading {
                level,
                text: tokenize(rest),
            }),
            Line::ListItem(rest) => self.pending_items.push(tokenize(rest)),
            Line::Text(text) => self.emit(Block::Paragraph {
                text: tokenize(text),
            }),
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush_list();
        self.blocks
    }
}

/// Renders markdown subset source into display blocks.
///
/// Each line is trimmed and classified in priority order: blank, `---` rule,
/// `### `/`## `/`# ` heading, `- ` list item, paragraph. Consecutive list
/// items collapse into one list block; any other line (blank included)
/// closes the open list first. Text is tokenized for `**bold**` spans.
///
/// A leading byte order mark is ignored. Never fails: unrecognized syntax
/// becomes a paragraph of plain text.
///
/// # Arguments
///
/// * `source`: Markdown text with `\n` or `\r\n` line endings
///
/// # Returns
///
/// Blocks in source order, empty for empty input
///
/// # Examples
///
/// ```
/// use newsdesk::{Block, render};
///
/// let blocks = render("---");
/// assert_eq!(blocks, vec![Block::Rule]);
/// ```
pub fn render(source: &str) -> Vec<Block> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut state = RenderState::default();

    for raw in source.lines() {
        state.process(Line::classify(raw.trim()));
    }

    state.finish()
}
