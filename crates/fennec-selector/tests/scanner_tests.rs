//! Integration tests for the scanner and `tokenize`.

use fennec_selector::{Scanner, SelectorError, Status, Token, TokenType, tokenize};

fn types(tokens: &[Token]) -> Vec<TokenType> {
    tokens.iter().map(Token::token_type).collect()
}

fn contents(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(Token::content).collect()
}

#[test]
fn test_scan_attribute_name_and_end() {
    let mut tokens = Vec::new();
    let end = Scanner::new(Status::Attributes)
        .scan(&mut tokens, "name]", 0)
        .unwrap();

    assert_eq!(end, 5);
    assert_eq!(
        types(&tokens),
        [TokenType::AttributeName, TokenType::AttributeSelectorEnd]
    );
    assert_eq!(tokens[0].content(), "name");
    assert_eq!(tokens[0].position(), 0);
    assert_eq!(tokens[1].content(), "]");
    assert_eq!(tokens[1].position(), 4);
}

#[test]
fn test_scan_invalid_char() {
    let mut tokens = Vec::new();
    let error = Scanner::new(Status::Default)
        .scan(&mut tokens, "$", 0)
        .unwrap_err();

    assert_eq!(
        error,
        SelectorError::Syntax {
            character: '$',
            status: "Default",
            offset: 0,
            selector: "$".to_string(),
        }
    );
    assert_eq!(
        error.to_string(),
        "Invalid char '$' for status 'Default' at offset 0 in '$'"
    );
    assert!(tokens.is_empty());
}

#[test]
fn test_scan_stops_after_end_token() {
    let mut tokens = Vec::new();
    let end = Scanner::new(Status::Attributes)
        .scan(&mut tokens, "a='x']rest", 0)
        .unwrap();

    assert_eq!(end, 6);
    assert_eq!(
        types(&tokens),
        [
            TokenType::AttributeName,
            TokenType::AttributeOperator,
            TokenType::SingleQuoteStringStart,
            TokenType::StringChars,
            TokenType::SingleQuoteStringEnd,
            TokenType::AttributeSelectorEnd,
        ]
    );
}

#[test]
fn test_scan_from_offset() {
    let mut tokens = Vec::new();
    let end = Scanner::default().scan(&mut tokens, "div p", 4).unwrap();

    assert_eq!(end, 5);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].content(), "p");
    assert_eq!(tokens[0].position(), 4);
}

#[test]
fn test_scan_invalid_offset() {
    let mut tokens = Vec::new();
    let error = Scanner::default().scan(&mut tokens, "é", 1).unwrap_err();
    assert!(matches!(error, SelectorError::InvalidOffset { offset: 1, .. }));

    let error = Scanner::default().scan(&mut tokens, "ab", 5).unwrap_err();
    assert!(matches!(error, SelectorError::InvalidOffset { offset: 5, .. }));
}

#[test]
fn test_scan_empty_buffer() {
    let mut tokens = Vec::new();
    let end = Scanner::default().scan(&mut tokens, "", 0).unwrap();
    assert_eq!(end, 0);
    assert!(tokens.is_empty());
}

#[test]
fn test_scanner_status() {
    assert_eq!(Scanner::new(Status::StringDouble).status(), Status::StringDouble);
    assert_eq!(Scanner::default().status(), Status::Default);
}

#[test]
fn test_tokenize_child_combinator() {
    let tokens = tokenize("ul > li").unwrap();
    assert_eq!(
        types(&tokens),
        [
            TokenType::TypeSelector,
            TokenType::Combinator,
            TokenType::TypeSelector
        ]
    );
    assert_eq!(contents(&tokens), ["ul", " > ", "li"]);
    assert_eq!(tokens[2].position(), 5);
}

#[test]
fn test_tokenize_compound() {
    let tokens = tokenize("div.a#b").unwrap();
    assert_eq!(
        types(&tokens),
        [
            TokenType::TypeSelector,
            TokenType::ClassSelector,
            TokenType::IdSelector
        ]
    );
    assert_eq!(contents(&tokens), ["div", ".a", "#b"]);
}

#[test]
fn test_tokenize_descendant_and_list() {
    let tokens = tokenize("div p, a").unwrap();
    assert_eq!(
        types(&tokens),
        [
            TokenType::TypeSelector,
            TokenType::Whitespace,
            TokenType::TypeSelector,
            TokenType::SelectorSeparator,
            TokenType::TypeSelector,
        ]
    );
    assert_eq!(contents(&tokens), ["div", " ", "p", ", ", "a"]);
}

#[test]
fn test_tokenize_attribute_with_string() {
    let tokens = tokenize("a[href='x']").unwrap();
    assert_eq!(
        types(&tokens),
        [
            TokenType::TypeSelector,
            TokenType::AttributeSelectorStart,
            TokenType::AttributeName,
            TokenType::AttributeOperator,
            TokenType::SingleQuoteStringStart,
            TokenType::StringChars,
            TokenType::SingleQuoteStringEnd,
            TokenType::AttributeSelectorEnd,
        ]
    );
    let positions: Vec<usize> = tokens.iter().map(Token::position).collect();
    assert_eq!(positions, [0, 1, 2, 6, 7, 8, 9, 10]);
}

#[test]
fn test_tokenize_bracket_inside_string() {
    let tokens = tokenize(r#"[title="a]b"]"#).unwrap();
    assert_eq!(
        contents(&tokens),
        ["[", "title", "=", "\"", "a]b", "\"", "]"]
    );
    assert_eq!(tokens[4].token_type(), TokenType::StringChars);
}

#[test]
fn test_tokenize_escaped_quote() {
    let tokens = tokenize(r"[title='a\'b']").unwrap();
    assert_eq!(
        types(&tokens),
        [
            TokenType::AttributeSelectorStart,
            TokenType::AttributeName,
            TokenType::AttributeOperator,
            TokenType::SingleQuoteStringStart,
            TokenType::StringChars,
            TokenType::StringEscapedChar,
            TokenType::StringChars,
            TokenType::SingleQuoteStringEnd,
            TokenType::AttributeSelectorEnd,
        ]
    );
    assert_eq!(tokens[5].content(), "\\'");
}

#[test]
fn test_tokenize_nth_child() {
    let tokens = tokenize("li:nth-child(2n+1)").unwrap();
    assert_eq!(
        types(&tokens),
        [
            TokenType::TypeSelector,
            TokenType::PseudoClass,
            TokenType::ParametersStart,
            TokenType::PseudoClassPosition,
            TokenType::ParametersEnd,
        ]
    );
    assert_eq!(tokens[3].content(), "2n+1");
    assert_eq!(tokens[4].end(), 18);
}

#[test]
fn test_tokenize_string_in_default() {
    let tokens = tokenize(r#"p:contains("it's")"#).unwrap();
    assert_eq!(
        contents(&tokens),
        ["p", ":contains", "(", "\"", "it's", "\"", ")"]
    );
}

#[test]
fn test_tokenize_unterminated_string() {
    let tokens = tokenize("[title='abc").unwrap();
    assert_eq!(tokens.last().map(Token::content), Some("abc"));
    assert_eq!(tokens.last().map(Token::token_type), Some(TokenType::StringChars));
}

#[test]
fn test_tokenize_invalid_char_inside_attribute() {
    let error = tokenize("a[href(]").unwrap_err();
    assert_eq!(
        error,
        SelectorError::Syntax {
            character: '(',
            status: "Attributes",
            offset: 6,
            selector: "a[href(]".to_string(),
        }
    );
    assert_eq!(error.offset(), Some(6));
}

#[test]
fn test_tokenize_invalid_char_after_tokens() {
    let error = tokenize("div > p$").unwrap_err();
    assert!(matches!(
        error,
        SelectorError::Syntax {
            character: '$',
            offset: 7,
            ..
        }
    ));
}

#[test]
fn test_tokenize_sibling_of_element_named_n() {
    let tokens = tokenize("a+n").unwrap();
    assert_eq!(
        types(&tokens),
        [
            TokenType::TypeSelector,
            TokenType::Combinator,
            TokenType::TypeSelector
        ]
    );
    assert_eq!(contents(&tokens), ["a", "+", "n"]);
}

#[test]
fn test_tokenize_position_after_parameters_end() {
    let tokens = tokenize("li:nth-child(2)+li").unwrap();
    assert_eq!(tokens[3].token_type(), TokenType::PseudoClassPosition);
    assert_eq!(tokens[5].token_type(), TokenType::Combinator);
    assert_eq!(tokens[5].content(), "+");
}
