//! Block splitting and classification.

/// Code fence marker
pub const CODE_FENCE: &str = "```";

/// Structural type of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    /// Heading with level (1-6)
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// A normalized chunk of the source document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub text: String,
    pub kind: BlockKind,
}

impl Block {
    /// Classify a normalized block of text
    pub fn new(text: String) -> Self {
        let kind = classify(&text);
        Self { text, kind }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

/// Split a document into blocks and classify each one
pub fn parse_blocks(document: &str) -> Vec<Block> {
    split_blocks(document).into_iter().map(Block::new).collect()
}

/// Split a document on blank lines.
///
/// Every line is trimmed, the block is trimmed as a whole, and blocks that
/// end up empty are dropped. Document order is preserved.
pub fn split_blocks(document: &str) -> Vec<String> {
    document
        .split("\n\n")
        .map(|block| {
            block
                .split('\n')
                .map(str::trim)
                .collect::<Vec<_>>()
                .join("\n")
                .trim()
                .to_string()
        })
        .filter(|block| !block.is_empty())
        .collect()
}

/// Determine the kind of a normalized block.
///
/// Checks run in a fixed order (heading, code, quote, unordered list,
/// ordered list) and the first match wins. Anything else is a paragraph.
pub fn classify(block: &str) -> BlockKind {
    if let Some(level) = heading_level(block) {
        return BlockKind::Heading(level);
    }

    let lines: Vec<&str> = block.split('\n').collect();

    if is_code(&lines) {
        BlockKind::Code
    } else if lines.iter().all(|line| line.starts_with('>')) {
        BlockKind::Quote
    } else if lines.iter().all(|line| line.starts_with("- ")) {
        BlockKind::UnorderedList
    } else if is_ordered_list(&lines) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    }
}

/// Level of a `#`-prefixed heading, if the block starts with one
fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&hashes) && block[hashes..].starts_with(' ') {
        Some(hashes as u8)
    } else {
        None
    }
}

fn is_code(lines: &[&str]) -> bool {
    match (lines.first(), lines.last()) {
        (Some(first), Some(last)) if lines.len() > 1 => {
            first.starts_with(CODE_FENCE) && last.ends_with(CODE_FENCE)
        }
        _ => false,
    }
}

fn is_ordered_list(lines: &[&str]) -> bool {
    lines
        .iter()
        .enumerate()
        .all(|(i, line)| line.trim_start().starts_with(&format!("{}. ", i + 1)))
}
