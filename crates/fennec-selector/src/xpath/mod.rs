//! XPath 1.0 expression builder.
//!
//! Each compound selector becomes one location step: a node test from its
//! type selector and one predicate per remaining simple selector. Combinators
//! pick the axis of the next step, and selector lists become a union.

/// Compile options.
pub mod options;

pub use options::{CompileOptions, ContextMode};

use core::cmp::Ordering;

use fennec_common::warning::warn_once;

use crate::selector::{
    AttributeSelector, Combinator, ComplexSelector, CompoundSelector, Nth, PseudoClass,
    QualifiedName, SelectorList, SimpleSelector,
};

/// Builds XPath expressions from parsed selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct XPathBuilder {
    options: CompileOptions,
}

impl XPathBuilder {
    /// Create a builder with the given options.
    #[must_use]
    pub const fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    /// Build the expression for a selector list; lists become a union.
    #[must_use]
    pub fn build(&self, list: &SelectorList) -> String {
        list.selectors
            .iter()
            .map(|selector| self.complex(selector))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
    fn complex(&self, selector: &ComplexSelector) -> String {
        let mut path = match selector.leading {
            Some(Combinator::Child) => "child::".to_string(),
            Some(combinator) => axis(combinator).to_string(),
            None => self.options.context.prefix().to_string(),
        };
        path.push_str(&self.step(&selector.first));

        for (combinator, compound) in &selector.rest {
            path.push('/');
            path.push_str(axis(*combinator));
            path.push_str(&self.step(compound));
        }
        path
    }

    /// Node test plus predicates for one compound selector.
    fn step(&self, compound: &CompoundSelector) -> String {
        let mut selectors = compound.simple_selectors.as_slice();

        // `*-of-type` needs a concrete element name to test siblings against.
        let (node_test, sibling_test) = match selectors.first() {
            Some(SimpleSelector::Type(name)) => {
                selectors = &selectors[1..];
                let test = self.node_test(name);
                (test.clone(), Some(test))
            }
            Some(SimpleSelector::Universal(prefix)) => {
                selectors = &selectors[1..];
                (universal_test(prefix.as_deref()), None)
            }
            _ => ("*".to_string(), None),
        };

        let mut step = node_test;
        for simple in selectors {
            step.push('[');
            step.push_str(&self.condition(simple, sibling_test.as_deref()));
            step.push(']');
        }
        step
    }

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// `*|name` has no prefix to test against, so it matches on local name.
    fn node_test(&self, name: &QualifiedName) -> String {
        let local_name = self.name(&name.local_name);
        match name.prefix.as_deref() {
            None => local_name,
            Some("*") => format!("*[local-name() = {}]", literal(&local_name)),
            Some(prefix) => format!("{prefix}:{local_name}"),
        }
    }

    fn name(&self, name: &str) -> String {
        if self.options.lowercase_names {
            name.to_ascii_lowercase()
        } else {
            name.to_string()
        }
    }

    /// The predicate expression for one simple selector.
    fn condition(&self, simple: &SimpleSelector, sibling_test: Option<&str>) -> String {
        match simple {
            SimpleSelector::Type(name) => format!("self::{}", self.node_test(name)),
            SimpleSelector::Universal(prefix) => {
                format!("self::{}", universal_test(prefix.as_deref()))
            }
            // [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
            // Same as `[class~=name]`.
            SimpleSelector::Class(class) => word_condition("@class", class),
            // [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
            SimpleSelector::Id(id) => format!("@id = {}", literal(id)),
            SimpleSelector::Attribute(attribute) => self.attribute_condition(attribute),
            SimpleSelector::PseudoClass(pseudo_class) => {
                self.pseudo_class_condition(pseudo_class, sibling_test)
            }
            SimpleSelector::NeverMatch => "false()".to_string(),
        }
    }

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// "If 'val' is the empty string", `^=`, `$=` and `*=` "represent nothing".
    fn attribute_condition(&self, attribute: &AttributeSelector) -> String {
        match attribute {
            AttributeSelector::Exists(name) => format!("@{}", self.name(name)),
            AttributeSelector::Equals(name, value) => {
                format!("@{} = {}", self.name(name), literal(value))
            }
            AttributeSelector::NotEquals(name, value) => {
                format!("not(@{} = {})", self.name(name), literal(value))
            }
            AttributeSelector::Includes(name, value) => {
                word_condition(&format!("@{}", self.name(name)), value)
            }
            AttributeSelector::DashMatch(name, value) => {
                let attr = format!("@{}", self.name(name));
                format!(
                    "{attr} = {} or starts-with({attr}, {})",
                    literal(value),
                    literal(&format!("{value}-"))
                )
            }
            AttributeSelector::PrefixMatch(_, value)
            | AttributeSelector::SuffixMatch(_, value)
            | AttributeSelector::SubstringMatch(_, value)
                if value.is_empty() =>
            {
                "false()".to_string()
            }
            AttributeSelector::PrefixMatch(name, value) => {
                format!("starts-with(@{}, {})", self.name(name), literal(value))
            }
            AttributeSelector::SuffixMatch(name, value) => {
                let attr = format!("@{}", self.name(name));
                format!(
                    "substring({attr}, string-length({attr}) - {}) = {}",
                    value.chars().count() - 1,
                    literal(value)
                )
            }
            AttributeSelector::SubstringMatch(name, value) => {
                format!("contains(@{}, {})", self.name(name), literal(value))
            }
        }
    }

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// `sibling_test` is the node test of the compound's element name, if it
    /// has one. The `*-of-type` pseudo-classes never match without it.
    fn pseudo_class_condition(
        &self,
        pseudo_class: &PseudoClass,
        sibling_test: Option<&str>,
    ) -> String {
        match pseudo_class {
            PseudoClass::Root => "not(parent::*)".to_string(),
            PseudoClass::FirstChild => "not(preceding-sibling::*)".to_string(),
            PseudoClass::LastChild => "not(following-sibling::*)".to_string(),
            PseudoClass::FirstOfType => of_type("first-of-type", sibling_test, |test| {
                format!("not(preceding-sibling::{test})")
            }),
            PseudoClass::LastOfType => of_type("last-of-type", sibling_test, |test| {
                format!("not(following-sibling::{test})")
            }),
            PseudoClass::OnlyChild => {
                "not(preceding-sibling::*) and not(following-sibling::*)".to_string()
            }
            PseudoClass::OnlyOfType => of_type("only-of-type", sibling_test, |test| {
                format!("not(preceding-sibling::{test}) and not(following-sibling::{test})")
            }),
            PseudoClass::Empty => "not(* | text())".to_string(),
            PseudoClass::Link => {
                "@href and (local-name() = 'a' or local-name() = 'area')".to_string()
            }
            PseudoClass::Enabled => "not(@disabled)".to_string(),
            PseudoClass::Disabled => "@disabled".to_string(),
            PseudoClass::Checked => "@checked or @selected".to_string(),
            PseudoClass::NthChild(nth) => {
                nth_condition("(count(preceding-sibling::*) + 1)", *nth)
            }
            PseudoClass::NthLastChild(nth) => {
                nth_condition("(count(following-sibling::*) + 1)", *nth)
            }
            PseudoClass::NthOfType(nth) => of_type("nth-of-type", sibling_test, |test| {
                nth_condition(&format!("(count(preceding-sibling::{test}) + 1)"), *nth)
            }),
            PseudoClass::NthLastOfType(nth) => {
                of_type("nth-last-of-type", sibling_test, |test| {
                    nth_condition(&format!("(count(following-sibling::{test}) + 1)"), *nth)
                })
            }
            // [§ 4.3 :not()](https://www.w3.org/TR/selectors-4/#negation)
            PseudoClass::Not(compounds) => {
                let alternatives = compounds
                    .iter()
                    .map(|compound| format!("self::{}", self.step(compound)))
                    .collect::<Vec<_>>()
                    .join(" or ");
                format!("not({alternatives})")
            }
            PseudoClass::Contains(text) => format!("contains(., {})", literal(text)),
        }
    }
}

/// Build a `*-of-type` condition from the sibling node test.
///
/// XPath 1.0 cannot compare a sibling's name with the context node's, so a
/// compound without an element name compiles to `false()`.
fn of_type(
    pseudo_class: &str,
    sibling_test: Option<&str>,
    condition: impl FnOnce(&str) -> String,
) -> String {
    sibling_test.map_or_else(
        || {
            warn_once(
                "XPath",
                &format!("':{pseudo_class}' without an element name never matches"),
            );
            "false()".to_string()
        },
        condition,
    )
}

/// Location path prefix for the step after a combinator.
const fn axis(combinator: Combinator) -> &'static str {
    match combinator {
        Combinator::Descendant => "descendant::",
        Combinator::Child => "",
        Combinator::NextSibling => "following-sibling::*[1]/self::",
        Combinator::SubsequentSibling => "following-sibling::",
    }
}

fn universal_test(prefix: Option<&str>) -> String {
    match prefix {
        None | Some("*") => "*".to_string(),
        Some(prefix) => format!("{prefix}:*"),
    }
}

/// `~=` semantics: one of the whitespace-separated words of `attr` is `word`.
///
/// A word that is empty or contains whitespace "represents nothing".
fn word_condition(attr: &str, word: &str) -> String {
    if word.is_empty() || word.chars().any(char::is_whitespace) {
        return "false()".to_string();
    }
    format!(
        "contains(concat(' ', normalize-space({attr}), ' '), {})",
        literal(&format!(" {word} "))
    )
}

/// [§ 4.13 :nth-child()](https://www.w3.org/TR/selectors-4/#the-nth-child-pseudo)
///
/// True when the 1-based `position` equals `a*n + b` for some `n >= 0`.
fn nth_condition(position: &str, Nth { a, b }: Nth) -> String {
    match a.cmp(&0) {
        Ordering::Equal if b < 1 => "false()".to_string(),
        Ordering::Equal => format!("{position} = {b}"),
        Ordering::Greater => {
            let mut conditions = Vec::new();
            if b > 1 {
                conditions.push(format!("{position} >= {b}"));
            }
            if a > 1 {
                let offset = match b.cmp(&0) {
                    Ordering::Equal => position.to_string(),
                    Ordering::Greater => format!("({position} - {b})"),
                    Ordering::Less => format!("({position} + {})", -i64::from(b)),
                };
                conditions.push(format!("{offset} mod {a} = 0"));
            }
            if conditions.is_empty() {
                "true()".to_string()
            } else {
                conditions.join(" and ")
            }
        }
        Ordering::Less if b < 1 => "false()".to_string(),
        Ordering::Less => {
            let mut condition = format!("{position} <= {b}");
            if a < -1 {
                condition.push_str(&format!(" and ({b} - {position}) mod {} = 0", -i64::from(a)));
            }
            condition
        }
    }
}

/// Quote `value` as an XPath 1.0 string literal.
///
/// XPath 1.0 has no escapes, so a value containing both quote characters is
/// built with `concat()`.
#[must_use]
pub fn literal(value: &str) -> String {
    if !value.contains('\'') {
        format!("'{value}'")
    } else if !value.contains('"') {
        format!("\"{value}\"")
    } else {
        let parts = value
            .split('\'')
            .map(|part| format!("'{part}'"))
            .collect::<Vec<_>>()
            .join(", \"'\", ");
        format!("concat({parts})")
    }
}
