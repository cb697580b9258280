//! Property tests for the tokenizer.

use fennec_selector::{SelectorError, Token, parse, tokenize};
use quickcheck_macros::quickcheck;

/// Lexically valid selector fragments; any concatenation tokenizes.
const FRAGMENTS: &[&str] = &[
    "div",
    "svg|rect",
    "*",
    ".item",
    "#main",
    " ",
    " > ",
    "+",
    " ~ ",
    ", ",
    ":first-child",
    "::before",
    "(2n+1)",
    "(odd)",
    "[href]",
    "[lang|=en]",
    "[title='a]b']",
    r#"[data-x="q\"r"]"#,
    "'it''s'",
    r"'\''",
];

fn build(picks: &[u8]) -> String {
    picks
        .iter()
        .map(|&i| FRAGMENTS[usize::from(i) % FRAGMENTS.len()])
        .collect()
}

/// Tokens cover the input exactly, in order, with no gaps or overlaps.
fn covers(tokens: &[Token], selector: &str) -> bool {
    let mut offset = 0;
    for token in tokens {
        if token.position() != offset
            || token.length() != token.content().len()
            || token.length() == 0
        {
            return false;
        }
        offset = token.end();
    }
    offset == selector.len()
        && tokens.iter().map(Token::content).collect::<String>() == selector
}

#[quickcheck]
fn prop_fragments_tokenize_losslessly(picks: Vec<u8>) -> bool {
    let selector = build(&picks);
    tokenize(&selector).is_ok_and(|tokens| covers(&tokens, &selector))
}

#[quickcheck]
fn prop_any_input_is_lossless_or_a_syntax_error(selector: String) -> bool {
    match tokenize(&selector) {
        Ok(tokens) => covers(&tokens, &selector),
        Err(SelectorError::Syntax { offset, .. }) => {
            offset < selector.len() && selector.is_char_boundary(offset)
        }
        Err(_) => false,
    }
}

#[quickcheck]
fn prop_parse_never_panics(selector: String) -> bool {
    let _ = parse(&selector);
    true
}
