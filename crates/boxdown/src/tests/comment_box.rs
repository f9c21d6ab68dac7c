use crate::{ByteBuffer, CommentBox, Render};

fn rendered(f: impl FnOnce(&mut CommentBox, &mut ByteBuffer)) -> Vec<u8> {
    let mut ob = ByteBuffer::new();
    f(&mut CommentBox::with_width(10), &mut ob);
    ob.into_vec()
}

#[test]
fn header_is_centered() {
    let out = rendered(|r, ob| r.header(ob, b"abcd"));
    assert_eq!(out, b" *   abcd   \n");
}

#[test]
fn oversized_header_gets_no_padding() {
    let out = rendered(|r, ob| r.header(ob, b"abcdefghijkl"));
    assert_eq!(out, b" *abcdefghijkl\n");
}

#[test]
fn hrule_draws_a_full_width_divider() {
    let out = rendered(|r, ob| r.hrule(ob));
    assert_eq!(out, b" *\n *----------\n *\n");
}

#[test]
fn doc_hooks_bracket_the_box() {
    let out = rendered(|r, ob| {
        r.doc_header(ob);
        r.doc_footer(ob);
    });
    assert_eq!(out, b"/*\n *==========\n *==========\n */");
}

#[test]
fn user_link_points_at_github() {
    let out = rendered(|r, ob| r.user_link(ob, b"octocat"));
    assert_eq!(out, b" *     https://github.com/octocat\n");
}

#[test]
fn issue_link_splits_number_and_repository() {
    let out = rendered(|r, ob| r.issue_link(ob, b"123 some/repo"));
    assert_eq!(out, b" *     https://github.com/some/repo/issues/123\n");
}

#[test]
fn issue_link_without_repository_keeps_the_number() {
    let out = rendered(|r, ob| r.issue_link(ob, b"123"));
    assert_eq!(out, b" *     https://github.com//issues/123\n");
}

#[test]
fn list_items_are_indented() {
    let out = rendered(|r, ob| {
        r.ordered_list(ob, b"first", 3);
        r.unordered_list(ob, b"second");
    });
    assert_eq!(out, b" *          3.) first\n *          + second\n");
}

#[test]
fn line_break_is_a_bare_gutter() {
    let out = rendered(|r, ob| r.line_break(ob));
    assert_eq!(out, b" *\n");
}

#[test]
fn short_free_line_stays_on_one_line() {
    let out = rendered(|r, ob| r.free_line(ob, b"hi"));
    assert_eq!(out, b" * hi\n");
}

/// Width 10 leaves 8 content columns per wrapped line.
#[test]
fn long_free_line_wraps_with_gutter_prefixes() {
    let out = rendered(|r, ob| r.free_line(ob, b"abcdefghijklmnopqrst"));
    assert_eq!(out, b" * abcdefgh\n * ijklmnop\n * qrst\n");
}

#[test]
fn empty_free_line_is_just_the_gutter() {
    let out = rendered(|r, ob| r.free_line(ob, b""));
    assert_eq!(out, b" * \n");
}

/// Degenerate widths must not panic; the wrap span bottoms out at one
/// column.
#[test]
fn tiny_widths_still_render() {
    let mut ob = ByteBuffer::new();
    let mut narrow = CommentBox::with_width(0);
    narrow.header(&mut ob, b"x");
    narrow.free_line(&mut ob, b"ab");
    assert_eq!(ob.as_bytes(), b" *x\n * a\n * b\n");
}
