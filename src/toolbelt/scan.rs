//! # Document Scanner
//!
//! Locates the document's delimited regions without parsing their contents:
//! the front-matter block at the very top of the file and every fenced entry
//! block in the body. Results are byte offsets into the scanned text, so the
//! synchronizer can splice a replacement region or leave everything outside
//! a span untouched, byte for byte.
//!
//! Recognition is line-anchored: a delimiter or fence counts only when it is
//! a whole line of its own (trailing whitespace ignored). Front matter must
//! open at offset 0 and ends at the first later delimiter line; a missing
//! terminator means "no front matter", never an error. Entry blocks are
//! scanned independently over the whole document and never overlap: each
//! scan resumes past the previous block's end.

/// Delimiter line for front matter and for the region inside entry fences.
pub const DELIMITER: &str = "---";

/// Fence line that opens an entry block.
pub const ENTRY_FENCE: &str = "```yaml";

/// Half-open byte range `[start, end)` into the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The region of `text` this span identifies.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A delimited region. `outer` covers the delimiters (and, for entry blocks,
/// the opening fence); `inner` is the YAML text between the delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpan {
    pub outer: Span,
    pub inner: Span,
}

/// Locates the front-matter block: a delimiter line at offset 0, terminated
/// by the next delimiter line. The first terminator wins, even if the
/// document contains further delimiter lines inside entry blocks.
pub fn locate_front_matter(text: &str) -> Option<BlockSpan> {
    let first_end = line_end(text, 0);
    if text[..first_end].trim_end() != DELIMITER {
        return None;
    }
    if first_end == text.len() {
        // The opening line is the whole document; no terminator can follow
        return None;
    }
    let inner_start = first_end + 1;
    let (close_start, close_end) = find_delimiter_line(text, inner_start)?;
    Some(BlockSpan {
        outer: Span::new(0, close_end),
        inner: Span::new(inner_start, inner_end(inner_start, close_start)),
    })
}

/// Returns an iterator over entry-block spans, in document order.
/// Re-invoking restarts the scan from the top of the text.
pub fn entry_blocks(text: &str) -> EntryBlocks<'_> {
    EntryBlocks { text, pos: 0 }
}

/// Iterator state for [`entry_blocks`].
#[derive(Debug, Clone)]
pub struct EntryBlocks<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for EntryBlocks<'a> {
    type Item = BlockSpan;

    fn next(&mut self) -> Option<BlockSpan> {
        while let Some(fence_start) = find_fence_line(self.text, self.pos) {
            let fence_end = line_end(self.text, fence_start);
            match block_after_fence(self.text, fence_start, fence_end) {
                Some(block) => {
                    self.pos = block.outer.end;
                    return Some(block);
                }
                // Fence without a delimited region after it: scan past it
                None => self.pos = fence_end,
            }
        }
        None
    }
}

/// Byte offset just past the line starting at `start`, exclusive of the
/// newline itself.
fn line_end(text: &str, start: usize) -> usize {
    text[start..]
        .find('\n')
        .map(|i| start + i)
        .unwrap_or(text.len())
}

/// The inner region ends before the newline that precedes the closing
/// delimiter; an immediately closed block has an empty inner region.
fn inner_end(inner_start: usize, close_start: usize) -> usize {
    if close_start > inner_start {
        close_start - 1
    } else {
        inner_start
    }
}

/// Finds the next line at or after `from` that is exactly the delimiter
/// (trailing whitespace ignored). Returns the line's start offset and the
/// offset just past the delimiter token.
fn find_delimiter_line(text: &str, from: usize) -> Option<(usize, usize)> {
    let mut pos = from;
    loop {
        let end = line_end(text, pos);
        if text[pos..end].trim_end() == DELIMITER {
            return Some((pos, pos + DELIMITER.len()));
        }
        if end == text.len() {
            return None;
        }
        pos = end + 1;
    }
}

/// Finds the next line at or after `from` that consists of the entry fence
/// token alone. The fence must start its line.
fn find_fence_line(text: &str, from: usize) -> Option<usize> {
    let mut at = from;
    while at < text.len() {
        let start = at + text[at..].find(ENTRY_FENCE)?;
        let at_line_start = start == 0 || text.as_bytes()[start - 1] == b'\n';
        let end = line_end(text, start);
        let trailing = &text[start + ENTRY_FENCE.len()..end];
        if at_line_start && trailing.trim().is_empty() {
            return Some(start);
        }
        at = start + ENTRY_FENCE.len();
    }
    None
}

/// Parses the delimited region that must follow a fence line: optional blank
/// lines, an opening delimiter line, inner text, a closing delimiter line.
fn block_after_fence(text: &str, fence_start: usize, fence_end: usize) -> Option<BlockSpan> {
    if fence_end == text.len() {
        return None;
    }
    let mut pos = fence_end + 1;
    loop {
        let end = line_end(text, pos);
        let line = &text[pos..end];
        if line.trim_end() == DELIMITER {
            break;
        }
        if !line.trim().is_empty() || end == text.len() {
            return None;
        }
        pos = end + 1;
    }
    let open_end = line_end(text, pos);
    if open_end == text.len() {
        return None;
    }
    let inner_start = open_end + 1;
    let (close_start, close_end) = find_delimiter_line(text, inner_start)?;
    Some(BlockSpan {
        outer: Span::new(fence_start, close_end),
        inner: Span::new(inner_start, inner_end(inner_start, close_start)),
    })
}
