//! Recognition rules for each lexical context of a selector.
//!
//! A [`Status`] knows three things about its context: which token comes next
//! at a given offset, which token closes the context, and which tokens open a
//! nested one. The [`Scanner`](super::Scanner) does the rest.

use std::sync::LazyLock;

use regex::Regex;
use strum_macros::{Display, IntoStaticStr};

use super::token::{Token, TokenType};

/// A lexical context of the selector grammar.
///
/// ```text
/// Default ──[──▶ Attributes ──'──▶ StringSingle
///    │               └──────"──▶ StringDouble
///    ├──'──▶ StringSingle
///    └──"──▶ StringDouble
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, IntoStaticStr)]
pub enum Status {
    /// Top-level selector syntax: type, class, id and pseudo selectors,
    /// combinators, separators, parameters, and the entry points into
    /// attribute brackets and quoted strings.
    #[default]
    Default,
    /// Inside `[...]`: attribute names, operators, unquoted values and quoted
    /// strings. Closed by `]`.
    Attributes,
    /// Inside `'...'`. Closed by `'`.
    StringSingle,
    /// Inside `"..."`. Closed by `"`.
    StringDouble,
}

/// Compiled rule table for one [`Status`].
struct Rules {
    /// Single fixed characters, checked before any pattern.
    chars: &'static [(char, TokenType)],
    /// Patterns anchored at the current offset, tried in declared order.
    patterns: Vec<(TokenType, Regex)>,
}

impl Rules {
    fn compile(chars: &'static [(char, TokenType)], patterns: &[(TokenType, &str)]) -> Self {
        let patterns = patterns
            .iter()
            .map(|&(token_type, pattern)| {
                // Every pattern in the static tables below is valid.
                let regex = Regex::new(&format!("^(?:{pattern})"))
                    .unwrap_or_else(|e| panic!("invalid {token_type} pattern: {e}"));
                (token_type, regex)
            })
            .collect();
        Self { chars, patterns }
    }
}

const DEFAULT_CHARS: &[(char, TokenType)] = &[
    ('[', TokenType::AttributeSelectorStart),
    ('(', TokenType::ParametersStart),
    (')', TokenType::ParametersEnd),
    ('\'', TokenType::SingleQuoteStringStart),
    ('"', TokenType::DoubleQuoteStringStart),
];

// Order matters: separators and combinators swallow their surrounding
// whitespace, and positions must win over combinators for `2n+1`.
const DEFAULT_PATTERNS: &[(TokenType, &str)] = &[
    (TokenType::SelectorSeparator, r"\s*,\s*"),
    (
        TokenType::PseudoClassPosition,
        r"[+-]?\d+n(?:\s*[+-]\s*\d+)?\b|[+-]n(?:\s*[+-]\s*\d+)?\b|n\s*[+-]\s*\d+\b|[+-]?\d+\b",
    ),
    (TokenType::Combinator, r"\s*[>+~]\s*"),
    (TokenType::Whitespace, r"\s+"),
    (TokenType::PseudoElement, r"::[\w-]+"),
    (TokenType::PseudoClass, r":[\w-]+"),
    (TokenType::ClassSelector, r"\.[\w-]+"),
    (TokenType::IdSelector, r"#[\w-]+"),
    (TokenType::TypeSelector, r"(?:(?:\*|[\w-]+)\|)?(?:\*|[\w-]+)"),
];

const ATTRIBUTES_CHARS: &[(char, TokenType)] = &[
    (']', TokenType::AttributeSelectorEnd),
    ('\'', TokenType::SingleQuoteStringStart),
    ('"', TokenType::DoubleQuoteStringStart),
];

const ATTRIBUTES_PATTERNS: &[(TokenType, &str)] = &[
    (TokenType::Whitespace, r"\s+"),
    (TokenType::AttributeOperator, r"[~|^$*!]?="),
    (TokenType::AttributeName, r"[\w.:-]+"),
];

const STRING_SINGLE_CHARS: &[(char, TokenType)] = &[('\'', TokenType::SingleQuoteStringEnd)];

const STRING_SINGLE_PATTERNS: &[(TokenType, &str)] = &[
    (TokenType::StringEscapedChar, r"(?s)\\."),
    (TokenType::StringChars, r"[^\\']+"),
];

const STRING_DOUBLE_CHARS: &[(char, TokenType)] = &[('"', TokenType::DoubleQuoteStringEnd)];

const STRING_DOUBLE_PATTERNS: &[(TokenType, &str)] = &[
    (TokenType::StringEscapedChar, r"(?s)\\."),
    (TokenType::StringChars, r#"[^\\"]+"#),
];

static DEFAULT_RULES: LazyLock<Rules> =
    LazyLock::new(|| Rules::compile(DEFAULT_CHARS, DEFAULT_PATTERNS));
static ATTRIBUTES_RULES: LazyLock<Rules> =
    LazyLock::new(|| Rules::compile(ATTRIBUTES_CHARS, ATTRIBUTES_PATTERNS));
static STRING_SINGLE_RULES: LazyLock<Rules> =
    LazyLock::new(|| Rules::compile(STRING_SINGLE_CHARS, STRING_SINGLE_PATTERNS));
static STRING_DOUBLE_RULES: LazyLock<Rules> =
    LazyLock::new(|| Rules::compile(STRING_DOUBLE_CHARS, STRING_DOUBLE_PATTERNS));

impl Status {
    fn rules(self) -> &'static Rules {
        match self {
            Self::Default => &DEFAULT_RULES,
            Self::Attributes => &ATTRIBUTES_RULES,
            Self::StringSingle => &STRING_SINGLE_RULES,
            Self::StringDouble => &STRING_DOUBLE_RULES,
        }
    }

    /// The name used for this status in diagnostics.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Recognize the token starting exactly at byte `offset` of `buffer`.
    ///
    /// Fixed characters are tried first, then patterns in declared order; the
    /// first rule that matches wins. Returns `None` if no rule matches, or if
    /// `offset` is past the end of the buffer or not on a character boundary.
    ///
    /// An `an+b` position is only recognized as the first thing inside `(`,
    /// so `a+n` stays a combinator followed by a type selector.
    #[must_use]
    pub fn recognize_token(self, buffer: &str, offset: usize) -> Option<Token> {
        let rest = buffer.get(offset..)?;
        let first = rest.chars().next()?;
        let rules = self.rules();

        if let Some(&(_, token_type)) = rules.chars.iter().find(|&&(c, _)| c == first) {
            return Some(Token::new(
                token_type,
                &rest[..first.len_utf8()],
                offset,
            ));
        }

        rules
            .patterns
            .iter()
            .filter(|(token_type, _)| {
                *token_type != TokenType::PseudoClassPosition || opens_argument(buffer, offset)
            })
            .find_map(|(token_type, regex)| {
                regex
                    .find(rest)
                    .map(|m| Token::new(*token_type, m.as_str(), offset))
            })
    }

    /// Returns true if `token` closes this context.
    ///
    /// `Default` is the top level and has no terminator.
    #[must_use]
    pub const fn is_end_token(self, token: &Token) -> bool {
        matches!(
            (self, token.token_type()),
            (Self::Attributes, TokenType::AttributeSelectorEnd)
                | (Self::StringSingle, TokenType::SingleQuoteStringEnd)
                | (Self::StringDouble, TokenType::DoubleQuoteStringEnd)
        )
    }

    /// The nested context `token` opens, if any.
    #[must_use]
    pub const fn next_status(self, token: &Token) -> Option<Self> {
        match (self, token.token_type()) {
            (Self::Default, TokenType::AttributeSelectorStart) => Some(Self::Attributes),
            (Self::Default | Self::Attributes, TokenType::SingleQuoteStringStart) => {
                Some(Self::StringSingle)
            }
            (Self::Default | Self::Attributes, TokenType::DoubleQuoteStringStart) => {
                Some(Self::StringDouble)
            }
            _ => None,
        }
    }
}

/// Returns true if `offset` starts the argument of a `(`, ignoring whitespace.
fn opens_argument(buffer: &str, offset: usize) -> bool {
    buffer
        .get(..offset)
        .is_some_and(|before| before.trim_end().ends_with('('))
}
