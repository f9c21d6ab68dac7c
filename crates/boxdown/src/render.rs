//! The renderer contract invoked by the document scanner.
//!
//! Each method corresponds to one recognized markup construct. Every method
//! has a default no-op body, so a renderer that does not override a slot
//! silently drops that construct from the output. All formatting decisions
//! live in the renderer; the scanner only extracts payloads.

use crate::buffer::ByteBuffer;

/// A set of output-producing callbacks, one per markup construct.
///
/// The document invokes `doc_header` once before the first token and
/// `doc_footer` once after the last; the remaining methods fire in token
/// recognition order. Payloads are raw bytes taken verbatim from the input.
///
/// # Examples
///
/// A renderer overriding a single slot:
///
/// ```rust
/// use boxdown::{ByteBuffer, Document, Render};
///
/// struct Plain;
///
/// impl Render for Plain {
///     fn header(&mut self, ob: &mut ByteBuffer, content: &[u8]) {
///         ob.put(content);
///         ob.put_byte(b'\n');
///     }
/// }
///
/// let mut doc = Document::new();
/// let out = doc.render(&mut Plain, b"#Title\n").unwrap();
/// assert_eq!(out.as_bytes(), b"Title\n");
/// ```
pub trait Render {
    /// Called once before any token is dispatched.
    fn doc_header(&mut self, _ob: &mut ByteBuffer) {}

    /// Called once after the last token, on successful passes only.
    fn doc_footer(&mut self, _ob: &mut ByteBuffer) {}

    /// A `#`-led header line; `content` excludes the leading `#` and the
    /// terminating newline.
    fn header(&mut self, _ob: &mut ByteBuffer, _content: &[u8]) {}

    /// A `---` horizontal rule.
    fn hrule(&mut self, _ob: &mut ByteBuffer) {}

    /// An `@`-led user reference; `content` runs up to the next whitespace.
    fn user_link(&mut self, _ob: &mut ByteBuffer, _content: &[u8]) {}

    /// A `#`-led line whose payload starts with a decimal digit; `content`
    /// is the full payload including the digits.
    fn issue_link(&mut self, _ob: &mut ByteBuffer, _content: &[u8]) {}

    /// A `.` line break; no payload.
    fn line_break(&mut self, _ob: &mut ByteBuffer) {}

    /// A `+`-led list item; `item` has leading ASCII whitespace trimmed.
    fn unordered_list(&mut self, _ob: &mut ByteBuffer, _item: &[u8]) {}

    /// A digit-led list item with its parsed decimal `index`.
    fn ordered_list(&mut self, _ob: &mut ByteBuffer, _item: &[u8], _index: u64) {}

    /// A line of plain prose. The scanned token set never produces this
    /// construct; the slot exists for renderers driven by other front ends.
    fn free_line(&mut self, _ob: &mut ByteBuffer, _line: &[u8]) {}
}
