//! Integration tests for selector tokens.

use fennec_selector::{Token, TokenType};

#[test]
fn test_token_accessors() {
    let token = Token::new(TokenType::ClassSelector, ".nav-item", 3);
    assert_eq!(token.token_type(), TokenType::ClassSelector);
    assert_eq!(token.content(), ".nav-item");
    assert_eq!(token.position(), 3);
    assert_eq!(token.length(), 9);
    assert_eq!(token.end(), 12);
    assert!(token.is(TokenType::ClassSelector));
    assert!(!token.is(TokenType::IdSelector));
}

#[test]
fn test_token_length_counts_bytes() {
    let token = Token::new(TokenType::StringChars, "héllo", 0);
    assert_eq!(token.length(), 6);
}

#[test]
fn test_token_type_display_is_kebab_case() {
    assert_eq!(TokenType::AttributeSelectorStart.to_string(), "attribute-selector-start");
    assert_eq!(TokenType::StringEscapedChar.to_string(), "string-escaped-char");
    assert_eq!(TokenType::PseudoClassPosition.to_string(), "pseudo-class-position");
}

#[test]
fn test_token_display() {
    let token = Token::new(TokenType::ClassSelector, ".foo", 3);
    assert_eq!(token.to_string(), "TOKEN#class-selector:3 '.foo'");
}

#[test]
fn test_token_display_escapes_content() {
    let token = Token::new(TokenType::StringChars, "it's", 1);
    assert_eq!(token.to_string(), "TOKEN#string-chars:1 'it\\'s'");

    let token = Token::new(TokenType::Whitespace, "\r\n", 0);
    assert_eq!(token.to_string(), "TOKEN#whitespace:0 '\\r\\n'");

    let token = Token::new(TokenType::StringEscapedChar, "\\'", 4);
    assert_eq!(token.to_string(), "TOKEN#string-escaped-char:4 '\\\\\\''");
}

#[test]
fn test_token_serializes_to_json() {
    let token = Token::new(TokenType::AttributeName, "href", 2);
    let json = serde_json::to_string(&token).unwrap();
    assert_eq!(
        json,
        r#"{"type":"attribute-name","content":"href","position":2,"length":4}"#
    );
}
