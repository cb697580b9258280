//! Selector token types.
//!
//! The output of a scan is an ordered list of [`Token`]s. Every token records
//! the exact slice of the selector it was matched from, so concatenating the
//! `content` of all tokens reproduces the scanned input.

use core::fmt::{self, Write as _};

use serde::Serialize;
use strum_macros::Display;

/// The lexical kind of a [`Token`].
///
/// Each [`Status`](super::Status) recognizes a subset of these types; which
/// subset is listed on each variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TokenType {
    /// A run of whitespace. `Default`, `Attributes`.
    Whitespace,
    /// An element name, `*`, or a namespaced name such as `svg|rect`. `Default`.
    TypeSelector,
    /// `.name`. `Default`.
    ClassSelector,
    /// `#name`. `Default`.
    IdSelector,
    /// `:name`. `Default`.
    PseudoClass,
    /// `::name`. `Default`.
    PseudoElement,
    /// An `an+b` argument such as `2n+1`, `-n+3` or `5`. `Default`.
    PseudoClassPosition,
    /// `[`, enters the `Attributes` status. `Default`.
    AttributeSelectorStart,
    /// `]`, terminates the `Attributes` status.
    AttributeSelectorEnd,
    /// An attribute name, or an unquoted attribute value. `Attributes`.
    AttributeName,
    /// `=`, `~=`, `|=`, `^=`, `$=`, `*=` or `!=`. `Attributes`.
    AttributeOperator,
    /// `(`. `Default`.
    ParametersStart,
    /// `)`. `Default`.
    ParametersEnd,
    /// `,` with any surrounding whitespace. `Default`.
    SelectorSeparator,
    /// `>`, `+` or `~` with any surrounding whitespace. `Default`.
    Combinator,
    /// `'`, enters the `StringSingle` status.
    SingleQuoteStringStart,
    /// `'`, terminates the `StringSingle` status.
    SingleQuoteStringEnd,
    /// `"`, enters the `StringDouble` status.
    DoubleQuoteStringStart,
    /// `"`, terminates the `StringDouble` status.
    DoubleQuoteStringEnd,
    /// A run of characters inside a string, without backslashes or the
    /// active quote.
    StringChars,
    /// A backslash followed by the character it escapes.
    StringEscapedChar,
}

/// A lexical unit of a selector.
///
/// Tokens are immutable: fields are only reachable through accessors and
/// `length` is fixed at construction as the byte length of `content`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    #[serde(rename = "type")]
    token_type: TokenType,
    content: String,
    position: usize,
    length: usize,
}

impl Token {
    /// Create a token of `token_type` matched at byte offset `position`.
    #[must_use]
    pub fn new(token_type: TokenType, content: impl Into<String>, position: usize) -> Self {
        let content = content.into();
        let length = content.len();
        Self {
            token_type,
            content,
            position,
            length,
        }
    }

    /// The lexical kind of this token.
    #[must_use]
    pub const fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// The exact text matched from the selector.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Zero-based byte offset of the match in the selector.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Byte length of [`content`](Self::content).
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Byte offset just past the end of this token.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.position + self.length
    }

    /// Returns true if this token has the given type.
    #[must_use]
    pub fn is(&self, token_type: TokenType) -> bool {
        self.token_type == token_type
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TOKEN#{}:{} '", self.token_type, self.position)?;
        for c in self.content.chars() {
            match c {
                '\\' => f.write_str("\\\\")?,
                '\r' => f.write_str("\\r")?,
                '\n' => f.write_str("\\n")?,
                '\'' => f.write_str("\\'")?,
                c => f.write_char(c)?,
            }
        }
        f.write_str("'")
    }
}
