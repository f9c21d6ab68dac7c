//! Boxed comment-block headers from a tiny line-oriented markup.
//!
//! A single-pass byte scanner recognizes a fixed set of line-leading tokens
//! (headers, rules, links, lists, line breaks) and dispatches each construct
//! to a pluggable [`Render`] implementation, which owns all formatting
//! decisions. The bundled [`CommentBox`] renderer produces `/* ... */`
//! comment boxes; any other output style is a matter of implementing the
//! trait.
//!
//! # Examples
//!
//! ```rust
//! use boxdown::{CommentBox, Document};
//!
//! let mut doc = Document::new();
//! let out = doc
//!     .render(&mut CommentBox::new(), b"#My Project\n---\n@octocat\n")
//!     .unwrap();
//! assert!(out.as_bytes().starts_with(b"/*\n"));
//! assert!(out.to_string().contains("https://github.com/octocat"));
//! ```

mod buffer;
mod comment_box;
mod document;
mod error;
mod refs;
mod render;

#[cfg(test)]
mod tests;

pub use buffer::ByteBuffer;
pub use comment_box::CommentBox;
pub use document::Document;
pub use error::{RenderError, SyntaxError, TokenKind};
pub use refs::{LinkRef, LinkRefTable};
pub use render::Render;
