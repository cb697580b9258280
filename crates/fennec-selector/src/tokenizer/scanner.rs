use super::status::Status;
use super::token::Token;
use crate::error::SelectorError;

/// Applies one [`Status`] to a selector buffer.
///
/// A scanner is created for every context entry: the top level, and each
/// attribute bracket or quoted string opened inside it. Nested scanners append
/// to the same token list, so the list stays in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scanner {
    status: Status,
}

impl Scanner {
    /// Create a scanner for the given context.
    #[must_use]
    pub const fn new(status: Status) -> Self {
        Self { status }
    }

    /// The context this scanner recognizes tokens for.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Scan `buffer` from byte `offset`, appending every token to `tokens`.
    ///
    /// Scanning stops at this status' end token, or when no rule matches.
    /// When a token opens a nested context, a child scanner consumes it
    /// (including its end token) and scanning resumes after it.
    ///
    /// Returns the offset just past the last consumed token.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::InvalidOffset`] if `offset` is past the end of the
    ///   buffer or inside a multi-byte character.
    /// - [`SelectorError::Syntax`] if no rule matches and the buffer is not
    ///   exhausted. Errors from nested scans propagate unchanged.
    pub fn scan(
        &self,
        tokens: &mut Vec<Token>,
        buffer: &str,
        offset: usize,
    ) -> Result<usize, SelectorError> {
        if !buffer.is_char_boundary(offset) {
            return Err(SelectorError::InvalidOffset {
                offset,
                selector: buffer.to_string(),
            });
        }

        let mut cursor = offset;
        while let Some(token) = self.status.recognize_token(buffer, cursor) {
            if token.length() == 0 {
                break;
            }
            cursor += token.length();

            let is_end = self.status.is_end_token(&token);
            let next_status = self.status.next_status(&token);
            tokens.push(token);

            if is_end {
                return Ok(cursor);
            }
            if let Some(status) = next_status {
                cursor = Self::new(status).scan(tokens, buffer, cursor)?;
            }
        }

        match buffer[cursor..].chars().next() {
            Some(character) => Err(SelectorError::Syntax {
                character,
                status: self.status.name(),
                offset: cursor,
                selector: buffer.to_string(),
            }),
            None => Ok(cursor),
        }
    }
}

/// Tokenize a whole selector under the [`Status::Default`] context.
///
/// # Errors
///
/// Returns [`SelectorError::Syntax`] if any part of the selector cannot be
/// tokenized.
///
/// # Example
/// ```
/// use fennec_selector::tokenizer::{TokenType, tokenize};
///
/// let tokens = tokenize("ul > li").unwrap();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1].token_type(), TokenType::Combinator);
/// ```
pub fn tokenize(selector: &str) -> Result<Vec<Token>, SelectorError> {
    let mut tokens = Vec::new();
    let _ = Scanner::default().scan(&mut tokens, selector, 0)?;
    Ok(tokens)
}
