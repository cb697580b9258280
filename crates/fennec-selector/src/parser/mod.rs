//! Selector parser.
//!
//! Walks the token list produced by the [`tokenizer`](crate::tokenizer) and
//! builds a [`SelectorList`]. Whitespace is significant only between compound
//! selectors, where it is the descendant combinator.

use fennec_common::warning::warn_once;

use crate::error::SelectorError;
use crate::selector::{
    AttributeSelector, Combinator, ComplexSelector, CompoundSelector, Nth, PseudoClass,
    QualifiedName, SelectorList, SimpleSelector,
};
use crate::tokenizer::{Token, TokenType, tokenize};

/// Recursive-descent parser over a selector's tokens.
pub struct Parser<'a> {
    /// The selector the tokens were scanned from
    selector: &'a str,
    /// Tokens of the whole selector
    tokens: Vec<Token>,
    /// Index of the next unconsumed token
    position: usize,
}

impl<'a> Parser<'a> {
    /// Tokenize `selector` and prepare to parse it.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::Syntax`] if the selector cannot be tokenized.
    pub fn new(selector: &'a str) -> Result<Self, SelectorError> {
        Ok(Self::from_tokens(selector, tokenize(selector)?))
    }

    /// Parse an already tokenized selector.
    #[must_use]
    pub const fn from_tokens(selector: &'a str, tokens: Vec<Token>) -> Self {
        Self {
            selector,
            tokens,
            position: 0,
        }
    }

    /// [§ 4.1 Selector lists](https://www.w3.org/TR/selectors-4/#grouping)
    ///
    /// Parse the comma-separated list of complex selectors.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::EmptySelector`] for a blank selector and
    /// [`SelectorError::UnexpectedToken`] or [`SelectorError::UnexpectedEnd`]
    /// when the tokens do not form a selector.
    pub fn parse(mut self) -> Result<SelectorList, SelectorError> {
        if self.tokens.iter().all(|t| t.is(TokenType::Whitespace)) {
            return Err(SelectorError::EmptySelector);
        }

        let mut selectors = vec![self.parse_complex()?];
        while self.eat(TokenType::SelectorSeparator).is_some() {
            selectors.push(self.parse_complex()?);
        }

        if self.peek().is_some() {
            return Err(self.unexpected("',' or end of selector"));
        }
        Ok(SelectorList { selectors })
    }

    /// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
    fn parse_complex(&mut self) -> Result<ComplexSelector, SelectorError> {
        self.skip_whitespace();

        // Relative selector: `> li` starts from the context node.
        let leading = match self.eat(TokenType::Combinator) {
            Some(token) => Some(self.combinator(&token)?),
            None => None,
        };

        let first = self.parse_compound()?;
        let mut rest = Vec::new();

        loop {
            match self.peek_type() {
                Some(TokenType::Combinator) => {
                    let token = self.advance_token()?;
                    let combinator = self.combinator(&token)?;
                    rest.push((combinator, self.parse_compound()?));
                }
                // [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
                // "A descendant combinator is whitespace that separates two compound selectors."
                Some(TokenType::Whitespace) => {
                    self.position += 1;
                    match self.peek_type() {
                        None
                        | Some(TokenType::SelectorSeparator | TokenType::ParametersEnd) => break,
                        Some(TokenType::Combinator) => {}
                        Some(_) => rest.push((Combinator::Descendant, self.parse_compound()?)),
                    }
                }
                _ => break,
            }
        }

        Ok(ComplexSelector {
            leading,
            first,
            rest,
        })
    }

    /// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
    fn parse_compound(&mut self) -> Result<CompoundSelector, SelectorError> {
        let mut simple_selectors = Vec::new();

        if let Some(token) = self.eat(TokenType::TypeSelector) {
            simple_selectors.push(type_selector(token.content()));
        }

        loop {
            let simple = match self.peek_type() {
                Some(TokenType::ClassSelector) => {
                    let token = self.advance_token()?;
                    SimpleSelector::Class(sigil_name(&token).to_string())
                }
                Some(TokenType::IdSelector) => {
                    let token = self.advance_token()?;
                    SimpleSelector::Id(sigil_name(&token).to_string())
                }
                Some(TokenType::AttributeSelectorStart) => {
                    SimpleSelector::Attribute(self.parse_attribute()?)
                }
                Some(TokenType::PseudoClass) => self.parse_pseudo_class()?,
                Some(TokenType::PseudoElement) => {
                    let token = self.advance_token()?;
                    warn_once(
                        "Selector",
                        &format!("pseudo-element '{}' never matches", token.content()),
                    );
                    if self.peek_type() == Some(TokenType::ParametersStart) {
                        self.skip_parameters()?;
                    }
                    SimpleSelector::NeverMatch
                }
                _ => break,
            };
            simple_selectors.push(simple);
        }

        if simple_selectors.is_empty() {
            return Err(self.unexpected("a selector"));
        }
        Ok(CompoundSelector { simple_selectors })
    }

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    fn parse_attribute(&mut self) -> Result<AttributeSelector, SelectorError> {
        let _ = self.expect(TokenType::AttributeSelectorStart, "'['")?;
        self.skip_whitespace();
        let name = self
            .expect(TokenType::AttributeName, "an attribute name")?
            .content()
            .to_string();
        self.skip_whitespace();

        if self.eat(TokenType::AttributeSelectorEnd).is_some() {
            return Ok(AttributeSelector::Exists(name));
        }

        let operator = self.expect(TokenType::AttributeOperator, "an attribute operator or ']'")?;
        self.skip_whitespace();
        let value = self.parse_attribute_value()?;
        self.skip_whitespace();
        let _ = self.expect(TokenType::AttributeSelectorEnd, "']'")?;

        Ok(match operator.content() {
            "~=" => AttributeSelector::Includes(name, value),
            "|=" => AttributeSelector::DashMatch(name, value),
            "^=" => AttributeSelector::PrefixMatch(name, value),
            "$=" => AttributeSelector::SuffixMatch(name, value),
            "*=" => AttributeSelector::SubstringMatch(name, value),
            "!=" => AttributeSelector::NotEquals(name, value),
            _ => AttributeSelector::Equals(name, value),
        })
    }

    /// An attribute value is a quoted string or a bare name.
    fn parse_attribute_value(&mut self) -> Result<String, SelectorError> {
        match self.peek_type() {
            Some(TokenType::AttributeName) => Ok(self.advance_token()?.content().to_string()),
            Some(TokenType::SingleQuoteStringStart | TokenType::DoubleQuoteStringStart) => {
                self.parse_string()
            }
            _ => Err(self.unexpected("an attribute value")),
        }
    }

    /// Read a quoted string, resolving escapes, and return its value.
    fn parse_string(&mut self) -> Result<String, SelectorError> {
        let end = match self.peek_type() {
            Some(TokenType::SingleQuoteStringStart) => TokenType::SingleQuoteStringEnd,
            Some(TokenType::DoubleQuoteStringStart) => TokenType::DoubleQuoteStringEnd,
            _ => return Err(self.unexpected("a quoted string")),
        };
        self.position += 1;

        let mut value = String::new();
        loop {
            match self.peek_type() {
                Some(TokenType::StringChars) => value.push_str(self.advance_token()?.content()),
                Some(TokenType::StringEscapedChar) => {
                    value.push_str(sigil_name(&self.advance_token()?));
                }
                Some(t) if t == end => {
                    self.position += 1;
                    return Ok(value);
                }
                _ => return Err(self.unexpected("end of string")),
            }
        }
    }

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    fn parse_pseudo_class(&mut self) -> Result<SimpleSelector, SelectorError> {
        let token = self.expect(TokenType::PseudoClass, "a pseudo-class")?;
        let name = sigil_name(&token).to_ascii_lowercase();
        let has_parameters = self.peek_type() == Some(TokenType::ParametersStart);

        let pseudo_class = match (name.as_str(), has_parameters) {
            ("root", false) => PseudoClass::Root,
            ("first-child", false) => PseudoClass::FirstChild,
            ("last-child", false) => PseudoClass::LastChild,
            ("first-of-type", false) => PseudoClass::FirstOfType,
            ("last-of-type", false) => PseudoClass::LastOfType,
            ("only-child", false) => PseudoClass::OnlyChild,
            ("only-of-type", false) => PseudoClass::OnlyOfType,
            ("empty", false) => PseudoClass::Empty,
            ("link", false) => PseudoClass::Link,
            ("enabled", false) => PseudoClass::Enabled,
            ("disabled", false) => PseudoClass::Disabled,
            ("checked", false) => PseudoClass::Checked,
            ("nth-child", true) => PseudoClass::NthChild(self.parse_nth_parameter()?),
            ("nth-last-child", true) => PseudoClass::NthLastChild(self.parse_nth_parameter()?),
            ("nth-of-type", true) => PseudoClass::NthOfType(self.parse_nth_parameter()?),
            ("nth-last-of-type", true) => {
                PseudoClass::NthLastOfType(self.parse_nth_parameter()?)
            }
            ("not", true) => PseudoClass::Not(self.parse_not_parameter()?),
            ("contains", true) => PseudoClass::Contains(self.parse_text_parameter()?),

            // Interactive states (:hover, :focus), unknown names, and known
            // names with the wrong arity degrade to a never-matching selector.
            _ => {
                warn_once(
                    "Selector",
                    &format!("unsupported pseudo-class ':{name}' never matches"),
                );
                if has_parameters {
                    self.skip_parameters()?;
                }
                return Ok(SimpleSelector::NeverMatch);
            }
        };

        Ok(SimpleSelector::PseudoClass(pseudo_class))
    }

    /// `(an+b)`, `(odd)`, `(even)`
    fn parse_nth_parameter(&mut self) -> Result<Nth, SelectorError> {
        self.open_parameters()?;
        let nth = match self.peek_type() {
            Some(TokenType::PseudoClassPosition | TokenType::TypeSelector) => {
                parse_nth(self.advance_token()?.content())?
            }
            _ => return Err(self.unexpected("an an+b position")),
        };
        self.close_parameters()?;
        Ok(nth)
    }

    /// `(compound, compound, ...)`
    fn parse_not_parameter(&mut self) -> Result<Vec<CompoundSelector>, SelectorError> {
        self.open_parameters()?;
        let mut compounds = vec![self.parse_compound()?];
        while self.eat(TokenType::SelectorSeparator).is_some() {
            compounds.push(self.parse_compound()?);
        }
        self.close_parameters()?;
        Ok(compounds)
    }

    /// `("text")`, `('text')` or `(word)`
    fn parse_text_parameter(&mut self) -> Result<String, SelectorError> {
        self.open_parameters()?;
        let text = match self.peek_type() {
            Some(TokenType::TypeSelector) => self.advance_token()?.content().to_string(),
            _ => self.parse_string()?,
        };
        self.close_parameters()?;
        Ok(text)
    }

    fn open_parameters(&mut self) -> Result<(), SelectorError> {
        let _ = self.expect(TokenType::ParametersStart, "'('")?;
        self.skip_whitespace();
        Ok(())
    }

    fn close_parameters(&mut self) -> Result<(), SelectorError> {
        self.skip_whitespace();
        let _ = self.expect(TokenType::ParametersEnd, "')'")?;
        Ok(())
    }

    /// Skip a balanced `( ... )` group whose contents are not interpreted.
    fn skip_parameters(&mut self) -> Result<(), SelectorError> {
        let _ = self.expect(TokenType::ParametersStart, "'('")?;
        let mut depth = 1u32;
        while depth > 0 {
            match self.advance_token()?.token_type() {
                TokenType::ParametersStart => depth += 1,
                TokenType::ParametersEnd => depth -= 1,
                _ => {}
            }
        }
        Ok(())
    }

    fn combinator(&self, token: &Token) -> Result<Combinator, SelectorError> {
        Combinator::from_symbol(token.content()).ok_or_else(|| SelectorError::UnexpectedToken {
            found: token.to_string(),
            offset: token.position(),
            expected: "a combinator",
            selector: self.selector.to_string(),
        })
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn peek_type(&self) -> Option<TokenType> {
        self.peek().map(Token::token_type)
    }

    /// Consume the next token, failing at the end of input.
    fn advance_token(&mut self) -> Result<Token, SelectorError> {
        let token = self
            .tokens
            .get(self.position)
            .cloned()
            .ok_or_else(|| self.unexpected("more input"))?;
        self.position += 1;
        Ok(token)
    }

    /// Consume the next token if it has the given type.
    fn eat(&mut self, token_type: TokenType) -> Option<Token> {
        let token = self.peek().filter(|t| t.is(token_type)).cloned()?;
        self.position += 1;
        Some(token)
    }

    fn expect(
        &mut self,
        token_type: TokenType,
        expected: &'static str,
    ) -> Result<Token, SelectorError> {
        self.eat(token_type).ok_or_else(|| self.unexpected(expected))
    }

    fn skip_whitespace(&mut self) {
        while self.eat(TokenType::Whitespace).is_some() {}
    }

    /// Error for whatever is at the current position.
    fn unexpected(&self, expected: &'static str) -> SelectorError {
        match self.peek() {
            Some(token) => SelectorError::UnexpectedToken {
                found: token.to_string(),
                offset: token.position(),
                expected,
                selector: self.selector.to_string(),
            },
            None => SelectorError::UnexpectedEnd {
                expected,
                selector: self.selector.to_string(),
            },
        }
    }
}

/// Parse a selector string into a [`SelectorList`].
///
/// # Errors
///
/// Returns the first tokenizer or parser error.
///
/// # Example
/// ```
/// use fennec_selector::parse;
///
/// let list = parse("ul > li, p").unwrap();
/// assert_eq!(list.selectors.len(), 2);
/// ```
pub fn parse(selector: &str) -> Result<SelectorList, SelectorError> {
    Parser::new(selector)?.parse()
}

/// Token content after its one-byte sigil (`.`, `#`, `:` or `\`).
fn sigil_name(token: &Token) -> &str {
    token.content().get(1..).unwrap_or_default()
}

/// Build a type or universal selector from a type-selector token.
fn type_selector(raw: &str) -> SimpleSelector {
    let name = QualifiedName::parse(raw);
    if name.local_name == "*" {
        SimpleSelector::Universal(name.prefix)
    } else {
        SimpleSelector::Type(name)
    }
}

/// [§ 6.1 The An+B microsyntax](https://www.w3.org/TR/css-syntax-3/#anb-microsyntax)
///
/// Accepts `odd`, `even`, `b`, `an`, `an+b`, with optional signs and inner
/// whitespace.
///
/// # Errors
///
/// Returns [`SelectorError::InvalidPosition`] if `raw` is not an `an+b` value.
pub fn parse_nth(raw: &str) -> Result<Nth, SelectorError> {
    let invalid = || SelectorError::InvalidPosition {
        value: raw.to_string(),
    };
    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();

    match compact.as_str() {
        "odd" => return Ok(Nth::new(2, 1)),
        "even" => return Ok(Nth::new(2, 0)),
        _ => {}
    }

    match compact.split_once('n') {
        Some((a, b)) => {
            let a = match a {
                "" | "+" => 1,
                "-" => -1,
                digits => digits.parse().map_err(|_| invalid())?,
            };
            let b = if b.is_empty() {
                0
            } else if b.starts_with(['+', '-']) {
                b.parse().map_err(|_| invalid())?
            } else {
                return Err(invalid());
            };
            Ok(Nth::new(a, b))
        }
        None => compact.parse().map(|b| Nth::new(0, b)).map_err(|_| invalid()),
    }
}
