//! The document: a single-pass byte scanner dispatching to a renderer.
//!
//! Scanning is a lexical dispatch loop, not a nested grammar: each iteration
//! consumes one byte and the byte alone selects the construct. Payload
//! extraction consumes up to the construct's delimiter. Every
//! consume-until-delimiter loop is bounded by the input length and fails with
//! a structured [`RenderError`] when the input runs out first; the scanner
//! never reads past the logical end of the buffer.

use crate::{
    buffer::ByteBuffer,
    error::{RenderError, TokenKind},
    refs::LinkRefTable,
    render::Render,
};

/// A markup document.
///
/// Aggregates the input slot and the link-reference table; a caller-supplied
/// renderer is borrowed for the duration of one [`render`](Document::render)
/// call. Per-pass state (cursor position, reference table) is reset on every
/// call, so a document may render any number of inputs sequentially. It is
/// not safe to share one document across concurrent renders; use one
/// document per conversion job.
///
/// # Examples
///
/// ```rust
/// use boxdown::{CommentBox, Document};
///
/// let mut doc = Document::new();
/// let out = doc.render(&mut CommentBox::new(), b"#Title\n---\n").unwrap();
/// assert!(out.as_bytes().starts_with(b"/*"));
/// ```
#[derive(Debug, Default)]
pub struct Document {
    refs: LinkRefTable,
    input: ByteBuffer,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            refs: LinkRefTable::new(),
            input: ByteBuffer::with_capacity(1024),
        }
    }

    /// Renders `input` through `renderer` into a fresh output buffer.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] on malformed markup; no partial output is
    /// produced.
    pub fn render<R: Render>(
        &mut self,
        renderer: &mut R,
        input: &[u8],
    ) -> Result<ByteBuffer, RenderError> {
        let mut ob = ByteBuffer::with_capacity(1024);
        self.render_into(renderer, &mut ob, input)?;
        Ok(ob)
    }

    /// Renders `input` through `renderer`, appending to `ob`.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] on malformed markup. On error, bytes
    /// dispatched before the failure remain in `ob`; callers that need the
    /// no-partial-output guarantee must discard the buffer.
    pub fn render_into<R: Render>(
        &mut self,
        renderer: &mut R,
        ob: &mut ByteBuffer,
        input: &[u8],
    ) -> Result<(), RenderError> {
        self.refs.clear();
        self.input.clear();
        self.input.put(input);

        let result = scan(self.input.as_bytes(), renderer, ob);
        // Reference entries never outlive the pass, error or not.
        self.refs.clear();
        result
    }

    /// The document's link-reference table.
    #[must_use]
    pub fn link_refs(&self) -> &LinkRefTable {
        &self.refs
    }

    /// Mutable access to the link-reference table.
    ///
    /// The table is cleared at the start and end of every render pass, so
    /// entries inserted here do not survive into the next pass.
    pub fn link_refs_mut(&mut self) -> &mut LinkRefTable {
        &mut self.refs
    }
}

fn scan<R: Render>(data: &[u8], renderer: &mut R, ob: &mut ByteBuffer) -> Result<(), RenderError> {
    renderer.doc_header(ob);

    let mut cur = Cursor::new(data);
    while let Some(c) = cur.bump() {
        if c == 0 {
            break;
        }
        let start = cur.pos - 1;
        match c {
            b'#' => {
                let payload = cur
                    .take_until(|b| b == b'\n')
                    .ok_or_else(|| RenderError::unterminated(TokenKind::Header, start))?;
                if payload.first().is_some_and(u8::is_ascii_digit) {
                    renderer.issue_link(ob, payload);
                } else {
                    renderer.header(ob, payload);
                }
            }
            b'-' => {
                cur.expect_rule_dash(start)?;
                cur.expect_rule_dash(start)?;
                renderer.hrule(ob);
            }
            b'@' => {
                let payload = cur
                    .take_until(is_whitespace)
                    .ok_or_else(|| RenderError::unterminated(TokenKind::UserLink, start))?;
                renderer.user_link(ob, payload);
            }
            b'.' => renderer.line_break(ob),
            b'0'..=b'9' => {
                let mut index = u64::from(c - b'0');
                loop {
                    match cur.bump() {
                        Some(b) if b.is_ascii_digit() => {
                            index = index.saturating_mul(10).saturating_add(u64::from(b - b'0'));
                        }
                        // The terminating non-digit byte is consumed and
                        // discarded; the item payload starts after it.
                        Some(_) => break,
                        None => {
                            return Err(RenderError::unterminated(TokenKind::OrderedList, start));
                        }
                    }
                }
                let item = cur
                    .take_until(|b| b == b'\n')
                    .ok_or_else(|| RenderError::unterminated(TokenKind::OrderedList, start))?;
                renderer.ordered_list(ob, item, index);
            }
            b'+' => {
                let item = cur
                    .take_until(|b| b == b'\n')
                    .ok_or_else(|| RenderError::unterminated(TokenKind::UnorderedList, start))?;
                renderer.unordered_list(ob, item.trim_ascii_start());
            }
            // Not a token-leading byte; the grammar is directive-only.
            _ => {}
        }
    }

    renderer.doc_footer(ob);
    Ok(())
}

/// The whitespace set used between rule dashes and after user links.
///
/// NUL is included: it doubles as the end-of-document marker and the
/// original format treats it as a separator.
fn is_whitespace(b: u8) -> bool {
    matches!(b, b'\n' | b' ' | b'\t' | b'\r' | 0)
}

/// One cursor per render pass; positions only move forward.
struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.data.get(self.pos).copied()?;
        self.pos += 1;
        Some(b)
    }

    /// Consumes bytes up to and including the first byte matching `stop`,
    /// returning the payload excluding that byte. `None` when the input runs
    /// out before the delimiter.
    fn take_until(&mut self, stop: impl Fn(u8) -> bool) -> Option<&'a [u8]> {
        let start = self.pos;
        while let Some(b) = self.bump() {
            if stop(b) {
                return Some(&self.data[start..self.pos - 1]);
            }
        }
        None
    }

    /// Skips whitespace and requires the next real byte to be a dash.
    fn expect_rule_dash(&mut self, start: usize) -> Result<(), RenderError> {
        loop {
            match self.bump() {
                None => return Err(RenderError::unterminated(TokenKind::Hrule, start)),
                Some(b) if is_whitespace(b) => {}
                Some(b'-') => return Ok(()),
                Some(b) => return Err(RenderError::broken_rule(b, start)),
            }
        }
    }
}
