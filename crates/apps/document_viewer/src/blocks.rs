//! Line-oriented block splitter for the small subset of markdown documents use.

/// One rendered block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `#`-prefixed heading; `level` is the number of `#` characters.
    Heading {
        /// Heading depth, 1-based.
        level: usize,
        /// Heading text.
        text: String,
    },
    /// Consecutive `-`/`*` list items.
    List(Vec<String>),
    /// `---` separator.
    Rule,
    /// Consecutive plain lines joined by spaces.
    Paragraph(String),
}

fn heading(line: &str) -> Option<Block> {
    let level = line.chars().take_while(|c| *c == '#').count();
    let rest = &line[level..];
    if level == 0 || level > 6 || !rest.starts_with(' ') {
        return None;
    }
    Some(Block::Heading {
        level,
        text: rest.trim().to_string(),
    })
}

fn list_item(line: &str) -> Option<&str> {
    line.strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .map(str::trim)
}

/// Splits `text` into blocks. Unrecognized syntax is kept as paragraph text.
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut list: Vec<String> = Vec::new();

    fn flush(blocks: &mut Vec<Block>, paragraph: &mut Vec<&str>, list: &mut Vec<String>) {
        if !paragraph.is_empty() {
            blocks.push(Block::Paragraph(paragraph.join(" ")));
            paragraph.clear();
        }
        if !list.is_empty() {
            blocks.push(Block::List(std::mem::take(list)));
        }
    }

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            flush(&mut blocks, &mut paragraph, &mut list);
        } else if let Some(block) = heading(line) {
            flush(&mut blocks, &mut paragraph, &mut list);
            blocks.push(block);
        } else if line == "---" {
            flush(&mut blocks, &mut paragraph, &mut list);
            blocks.push(Block::Rule);
        } else if let Some(item) = list_item(line) {
            if !paragraph.is_empty() {
                flush(&mut blocks, &mut paragraph, &mut list);
            }
            list.push(item.to_string());
        } else {
            if !list.is_empty() {
                flush(&mut blocks, &mut paragraph, &mut list);
            }
            paragraph.push(line);
        }
    }
    flush(&mut blocks, &mut paragraph, &mut list);
    blocks
}
