#![no_main]
use boxdown::{CommentBox, Document, Render};
use libfuzzer_sys::fuzz_target;

struct Silent;
impl Render for Silent {}

// Malformed input must surface as a typed error, never as a panic or an
// out-of-bounds scan; both a no-op renderer and the comment-box renderer
// (with arbitrary, possibly degenerate widths) are driven over the same
// bytes.
fuzz_target!(|input: (u8, &[u8])| {
    let (width, data) = input;

    let mut doc = Document::new();
    let _ = doc.render(&mut Silent, data);
    let _ = doc.render(&mut CommentBox::with_width(usize::from(width)), data);
});
