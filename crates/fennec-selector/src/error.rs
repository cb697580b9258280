//! Errors raised while compiling a selector.

use thiserror::Error;

/// Error type for selector tokenizing, parsing, and compilation.
///
/// Every variant is fatal to the selector being compiled: no partial token
/// list or expression is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// No rule of the active status matches before the end of the selector.
    #[error("Invalid char '{character}' for status '{status}' at offset {offset} in '{selector}'")]
    Syntax {
        /// The character no rule could start a token with.
        character: char,
        /// Name of the status that was active.
        status: &'static str,
        /// Byte offset of `character`.
        offset: usize,
        /// The full selector being scanned.
        selector: String,
    },

    /// A scan was started past the end of the selector or inside a character.
    #[error("Offset {offset} is not a character boundary in '{selector}'")]
    InvalidOffset {
        /// The requested start offset.
        offset: usize,
        /// The full selector being scanned.
        selector: String,
    },

    /// The parser found a token it cannot use at this point.
    #[error("Unexpected {found} at offset {offset} in '{selector}', expected {expected}")]
    UnexpectedToken {
        /// Rendering of the offending token.
        found: String,
        /// Byte offset of the offending token.
        offset: usize,
        /// What the parser was looking for.
        expected: &'static str,
        /// The selector being parsed.
        selector: String,
    },

    /// The selector ended while the parser still expected input.
    #[error("Unexpected end of '{selector}', expected {expected}")]
    UnexpectedEnd {
        /// What the parser was looking for.
        expected: &'static str,
        /// The selector being parsed.
        selector: String,
    },

    /// An `an+b` argument that does not parse.
    #[error("Invalid position expression '{value}'")]
    InvalidPosition {
        /// The argument text as written.
        value: String,
    },

    /// The selector contains nothing but whitespace.
    #[error("Empty selector")]
    EmptySelector,
}

impl SelectorError {
    /// Byte offset into the selector this error points at, if any.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::Syntax { offset, .. }
            | Self::InvalidOffset { offset, .. }
            | Self::UnexpectedToken { offset, .. } => Some(*offset),
            Self::UnexpectedEnd { selector, .. } => Some(selector.len()),
            Self::InvalidPosition { .. } | Self::EmptySelector => None,
        }
    }
}
