//! Selector tokenizer, parser, and XPath builder for Fennec.
//!
//! # Scope
//!
//! This crate compiles CSS-style selectors into XPath 1.0 expressions for an
//! external XPath evaluator:
//! - **Tokenizer** - a [`Scanner`] driven by per-context [`Status`] rules
//!   (default, attribute brackets, single- and double-quoted strings)
//! - **Parser** - token list to [`SelectorList`]
//!   - Type, universal, class, ID and attribute selectors
//!   - Combinators (descendant, child, next sibling, subsequent sibling)
//!   - Structural pseudo-classes, `:nth-*()`, `:not()`, jQuery `:contains()`
//!   - Relative selectors (`> li`) and jQuery `[attr!=value]`
//! - **XPath builder** - [`SelectorList`] to an XPath string
//!
//! # Not Supported
//!
//! - Interactive pseudo-classes and pseudo-elements (compile to `false()`)
//! - CSS escapes outside quoted strings
//!
//! # Example
//! ```
//! use fennec_selector::to_xpath;
//!
//! assert_eq!(to_xpath("ul > li").unwrap(), "//ul/li");
//! ```

/// Errors raised while compiling a selector.
pub mod error;
/// Token list to selector tree.
pub mod parser;
/// Selector syntax tree.
pub mod selector;
/// Selector tokenizer.
pub mod tokenizer;
/// Selector tree to XPath.
pub mod xpath;

// Re-exports for convenience
pub use error::SelectorError;
pub use parser::{Parser, parse};
pub use selector::{
    AttributeSelector, Combinator, ComplexSelector, CompoundSelector, Nth, PseudoClass,
    QualifiedName, SelectorList, SimpleSelector,
};
pub use tokenizer::{Scanner, Status, Token, TokenType, tokenize};
pub use xpath::{CompileOptions, ContextMode, XPathBuilder};

/// Compile a selector to XPath with default [`CompileOptions`].
///
/// # Errors
///
/// Returns the first tokenizer or parser error.
pub fn to_xpath(selector: &str) -> Result<String, SelectorError> {
    to_xpath_with(selector, &CompileOptions::default())
}

/// Compile a selector to XPath.
///
/// # Errors
///
/// Returns the first tokenizer or parser error.
pub fn to_xpath_with(selector: &str, options: &CompileOptions) -> Result<String, SelectorError> {
    let list = parse(selector)?;
    Ok(XPathBuilder::new(*options).build(&list))
}
