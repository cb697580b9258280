//! Selector syntax tree.
//!
//! Produced by the [`parser`](crate::parser) from a token list and consumed by
//! the [`xpath`](crate::xpath) builder. Compound selectors are kept in source
//! order, left to right, which is also the order XPath location steps are
//! written in.

/// [§ 5 Elemental selectors](https://www.w3.org/TR/selectors-4/#elemental-selectors)
/// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
///
/// A simple selector is a single condition on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// "A type selector is the name of a document language element type,
    /// and represents an instance of that element type in the document tree."
    ///
    /// Examples: `div`, `svg|rect`, `*|a`
    Type(QualifiedName),

    /// [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector)
    /// "The universal selector is a single asterisk (*) and represents the
    /// qualified name of any element type."
    ///
    /// Examples: `*`, `svg|*`. Holds the namespace prefix, if any.
    Universal(Option<String>),

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Examples: `.highlight`, `.nav-item`
    Class(String),

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Examples: `#main`, `#nav-bar`
    Id(String),

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[href]`, `[type=text]`, `[lang|="en"]`
    Attribute(AttributeSelector),

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    PseudoClass(PseudoClass),

    /// Pseudo-class or pseudo-element that cannot be expressed against a
    /// static tree and always fails to match.
    ///
    /// Examples: `:hover`, `::before`, `:nth-col(2)`
    NeverMatch,
}

/// An element name with an optional namespace prefix.
///
/// `svg|rect` has prefix `svg`; `*|rect` has prefix `*` (any namespace);
/// `rect` has no prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    /// Namespace prefix, `*` for any namespace.
    pub prefix: Option<String>,
    /// Local name.
    pub local_name: String,
}

impl QualifiedName {
    /// Split a `prefix|name` type selector.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('|') {
            Some((prefix, local_name)) => Self {
                prefix: Some(prefix.to_string()),
                local_name: local_name.to_string(),
            },
            None => Self {
                prefix: None,
                local_name: raw.to_string(),
            },
        }
    }
}

/// Pseudo-classes per [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PseudoClass {
    /// [§ 4.4 :root](https://www.w3.org/TR/selectors-4/#the-root-pseudo)
    /// "The :root pseudo-class represents an element that is the root of the document."
    Root,

    /// [§ 4.12 :first-child](https://www.w3.org/TR/selectors-4/#the-first-child-pseudo)
    FirstChild,

    /// [§ 4.12 :last-child](https://www.w3.org/TR/selectors-4/#the-last-child-pseudo)
    LastChild,

    /// [§ 4.11 :first-of-type](https://www.w3.org/TR/selectors-4/#the-first-of-type-pseudo)
    FirstOfType,

    /// [§ 4.11 :last-of-type](https://www.w3.org/TR/selectors-4/#the-last-of-type-pseudo)
    LastOfType,

    /// [§ 4.12 :only-child](https://www.w3.org/TR/selectors-4/#the-only-child-pseudo)
    /// "The :only-child pseudo-class represents an element that has no siblings."
    OnlyChild,

    /// [§ 4.11 :only-of-type](https://www.w3.org/TR/selectors-4/#the-only-of-type-pseudo)
    OnlyOfType,

    /// [§ 4.5 :empty](https://www.w3.org/TR/selectors-4/#the-empty-pseudo)
    /// "The :empty pseudo-class represents an element that has no children at all."
    Empty,

    /// [§ 4.6 :link](https://www.w3.org/TR/selectors-4/#the-link-pseudo)
    /// `<a>` or `<area>` with an `href`; a static tree has no visited links.
    Link,

    /// `:enabled`, an element without the disabled attribute
    Enabled,

    /// `:disabled`, an element with the disabled attribute
    Disabled,

    /// `:checked`, an element with the checked or selected attribute
    Checked,

    /// [§ 4.13 :nth-child()](https://www.w3.org/TR/selectors-4/#the-nth-child-pseudo)
    NthChild(Nth),

    /// [§ 4.13 :nth-last-child()](https://www.w3.org/TR/selectors-4/#the-nth-last-child-pseudo)
    NthLastChild(Nth),

    /// [§ 4.13 :nth-of-type()](https://www.w3.org/TR/selectors-4/#the-nth-of-type-pseudo)
    NthOfType(Nth),

    /// [§ 4.13 :nth-last-of-type()](https://www.w3.org/TR/selectors-4/#the-nth-last-of-type-pseudo)
    NthLastOfType(Nth),

    /// [§ 4.3 :not()](https://www.w3.org/TR/selectors-4/#negation)
    /// "represents an element that is not represented by its argument."
    Not(Vec<CompoundSelector>),

    /// jQuery `:contains(text)`: the element's string value contains `text`.
    Contains(String),
}

/// An `an+b` position argument.
///
/// Matches the 1-based positions `a*n + b` for every `n >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nth {
    /// Step between matching positions.
    pub a: i32,
    /// Offset of the first matching position.
    pub b: i32,
}

impl Nth {
    /// Create a new `an+b` argument.
    #[must_use]
    pub const fn new(a: i32, b: i32) -> Self {
        Self { a, b }
    }
}

/// Attribute selectors per [§ 6.4](https://www.w3.org/TR/selectors-4/#attribute-selectors)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeSelector {
    /// `[attr]`: "Represents an element with the att attribute"
    Exists(String),

    /// `[attr=value]`: exact value match.
    Equals(String, String),

    /// `[attr~=value]`: one of the whitespace-separated words is `value`.
    Includes(String, String),

    /// `[attr|=value]`: exactly `value`, or `value` followed by `-`.
    DashMatch(String, String),

    /// `[attr^=value]`: value begins with the prefix.
    PrefixMatch(String, String),

    /// `[attr$=value]`: value ends with the suffix.
    SuffixMatch(String, String),

    /// `[attr*=value]`: value contains the substring.
    SubstringMatch(String, String),

    /// jQuery `[attr!=value]`: attribute missing or not equal to `value`.
    NotEquals(String, String),
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator, and represents a set of simultaneous
/// conditions on a single element."
///
/// A type or universal selector, when present, comes first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompoundSelector {
    /// The list of simple selectors that make up this compound selector.
    pub simple_selectors: Vec<SimpleSelector>,
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// [§ 16.1](https://www.w3.org/TR/selectors-4/#descendant-combinators) `A B`
    Descendant,

    /// [§ 16.2](https://www.w3.org/TR/selectors-4/#child-combinators) `A > B`
    Child,

    /// [§ 16.3](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators) `A + B`
    NextSibling,

    /// [§ 16.4](https://www.w3.org/TR/selectors-4/#general-sibling-combinators) `A ~ B`
    SubsequentSibling,
}

impl Combinator {
    /// Map a combinator token's trimmed content (`>`, `+`, `~`).
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol.trim() {
            ">" => Some(Self::Child),
            "+" => Some(Self::NextSibling),
            "~" => Some(Self::SubsequentSibling),
            _ => None,
        }
    }
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// Example: `div.container > ul.nav li`
/// ```text
/// first: [div.container]
/// rest:  [(Child, ul.nav), (Descendant, li)]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexSelector {
    /// Combinator relating `first` to the context node, for relative
    /// selectors such as `> li`. `None` means the compile context decides.
    pub leading: Option<Combinator>,

    /// The leftmost compound selector.
    pub first: CompoundSelector,

    /// Remaining compound selectors, each with the combinator joining it to
    /// the one before.
    pub rest: Vec<(Combinator, CompoundSelector)>,
}

impl ComplexSelector {
    /// The rightmost compound selector, which the selector matches.
    #[must_use]
    pub fn subject(&self) -> &CompoundSelector {
        self.rest.last().map_or(&self.first, |(_, compound)| compound)
    }
}

/// [§ 4.1 Selector lists](https://www.w3.org/TR/selectors-4/#grouping)
///
/// "A comma-separated list of selectors represents the union of all elements
/// selected by each of the individual selectors in the list."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList {
    /// The selectors of the list, in source order.
    pub selectors: Vec<ComplexSelector>,
}
