//! The boxed comment-block renderer.

use bstr::ByteSlice;

use crate::{buffer::ByteBuffer, render::Render};

const DEFAULT_WIDTH: usize = 100;
const LINK_INDENT: usize = 5;
const LIST_INDENT: usize = 10;

/// Renders the document as a `/* ... */` comment box.
///
/// Headers are centered, links expand to GitHub URLs, and free lines wrap at
/// the box width. The width is the number of fill columns between the `*`
/// gutter and the box edge.
///
/// # Examples
///
/// ```rust
/// use boxdown::{CommentBox, Document};
///
/// let mut doc = Document::new();
/// let out = doc.render(&mut CommentBox::with_width(8), b".").unwrap();
/// assert_eq!(out.as_bytes(), b"/*\n *========\n *\n *========\n */");
/// ```
#[derive(Debug, Clone)]
pub struct CommentBox {
    width: usize,
}

impl CommentBox {
    /// Creates a renderer with the default 100-column width.
    #[must_use]
    pub fn new() -> Self {
        Self::with_width(DEFAULT_WIDTH)
    }

    /// Creates a renderer with a custom box width.
    #[must_use]
    pub fn with_width(width: usize) -> Self {
        Self { width }
    }
}

impl Default for CommentBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for CommentBox {
    fn doc_header(&mut self, ob: &mut ByteBuffer) {
        ob.put_str("/*\n *");
        ob.put_byte_repeated(b'=', self.width);
        ob.put_byte(b'\n');
    }

    fn doc_footer(&mut self, ob: &mut ByteBuffer) {
        ob.put_str(" *");
        ob.put_byte_repeated(b'=', self.width);
        ob.put_str("\n */");
    }

    fn header(&mut self, ob: &mut ByteBuffer, content: &[u8]) {
        let pad = self.width.saturating_sub(content.len()) / 2;
        ob.put_str(" *");
        ob.put_byte_repeated(b' ', pad);
        ob.put(content);
        ob.put_byte_repeated(b' ', pad);
        ob.put_byte(b'\n');
    }

    fn hrule(&mut self, ob: &mut ByteBuffer) {
        ob.put_str(" *\n *");
        ob.put_byte_repeated(b'-', self.width);
        ob.put_str("\n *\n");
    }

    fn user_link(&mut self, ob: &mut ByteBuffer, content: &[u8]) {
        ob.put_str(" *");
        ob.put_byte_repeated(b' ', LINK_INDENT);
        ob.put_str("https://github.com/");
        ob.put(content);
        ob.put_byte(b'\n');
    }

    fn issue_link(&mut self, ob: &mut ByteBuffer, content: &[u8]) {
        // Payload shape: `<number> <owner/repo ...>`. Absent a space the
        // whole payload is the number and the repository part is empty.
        let (number, repo) = match content.find_byte(b' ') {
            Some(at) => (&content[..at], &content[at + 1..]),
            None => (content, &b""[..]),
        };
        ob.put_str(" *");
        ob.put_byte_repeated(b' ', LINK_INDENT);
        ob.put_str("https://github.com/");
        ob.put(repo);
        ob.put_str("/issues/");
        ob.put(number);
        ob.put_byte(b'\n');
    }

    fn line_break(&mut self, ob: &mut ByteBuffer) {
        ob.put_str(" *\n");
    }

    fn unordered_list(&mut self, ob: &mut ByteBuffer, item: &[u8]) {
        ob.put_str(" *");
        ob.put_byte_repeated(b' ', LIST_INDENT);
        ob.put_fmt(format_args!("+ {}\n", item.as_bstr()));
    }

    fn ordered_list(&mut self, ob: &mut ByteBuffer, item: &[u8], index: u64) {
        ob.put_str(" *");
        ob.put_byte_repeated(b' ', LIST_INDENT);
        ob.put_fmt(format_args!("{index}.) {}\n", item.as_bstr()));
    }

    fn free_line(&mut self, ob: &mut ByteBuffer, line: &[u8]) {
        ob.put_str(" * ");
        // Two columns are taken by the "* " gutter.
        let span = self.width.saturating_sub(2).max(1);
        let mut chunks = line.chunks(span);
        if let Some(first) = chunks.next() {
            ob.put(first);
        }
        for chunk in chunks {
            ob.put_str("\n * ");
            ob.put(chunk);
        }
        ob.put_byte(b'\n');
    }
}
