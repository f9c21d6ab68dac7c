use core::fmt;

use thiserror::Error;

/// The markup construct a scanner error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A `#`-led header (or issue link, which shares the leading byte).
    Header,
    /// A `---` horizontal rule.
    Hrule,
    /// An `@`-led user link.
    UserLink,
    /// A digit-led ordered list item.
    OrderedList,
    /// A `+`-led unordered list item.
    UnorderedList,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenKind::Header => "header",
            TokenKind::Hrule => "horizontal rule",
            TokenKind::UserLink => "user link",
            TokenKind::OrderedList => "ordered list",
            TokenKind::UnorderedList => "unordered list",
        })
    }
}

/// A malformed-markup condition detected by the scanner.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    /// A horizontal rule was opened but one of its two remaining dashes was
    /// some other byte.
    #[error("horizontal rule expects '-', found {found:?}")]
    BrokenRule {
        /// The offending byte.
        found: char,
    },
    /// The input ran out before a token's terminating delimiter was found.
    #[error("unterminated {0} token")]
    UnterminatedToken(TokenKind),
}

/// Error returned when a render pass aborts.
///
/// Carries the byte offset of the leading byte of the token whose parse
/// failed. No partial result is produced; the render is not resumable.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{source} at byte {offset}")]
pub struct RenderError {
    source: SyntaxError,
    /// Byte offset at which the offending token started.
    pub offset: usize,
}

impl RenderError {
    pub(crate) fn unterminated(kind: TokenKind, offset: usize) -> Self {
        Self {
            source: SyntaxError::UnterminatedToken(kind),
            offset,
        }
    }

    pub(crate) fn broken_rule(found: u8, offset: usize) -> Self {
        Self {
            source: SyntaxError::BrokenRule {
                found: char::from(found),
            },
            offset,
        }
    }

    /// The underlying syntax error.
    #[must_use]
    pub fn syntax(&self) -> SyntaxError {
        self.source
    }
}
