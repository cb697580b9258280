//! Selector tokenizer module.

/// Scanner driving a [`Status`] across the selector buffer.
pub mod scanner;
/// Per-context recognition rules.
pub mod status;
/// Token records and token types.
pub mod token;

pub use scanner::{Scanner, tokenize};
pub use status::Status;
pub use token::{Token, TokenType};
