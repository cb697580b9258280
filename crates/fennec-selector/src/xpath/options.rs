//! Compile options for the XPath builder.

/// Where the first location step of a compiled selector starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContextMode {
    /// Anywhere in the document: `//div`.
    #[default]
    Document,
    /// Descendants of the context node: `descendant::div`.
    Descendant,
    /// Children of the context node: `child::div`.
    Children,
    /// The context node itself: `self::div`.
    SelfNode,
}

impl ContextMode {
    /// The path prefix placed before the first node test.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Document => "//",
            Self::Descendant => "descendant::",
            Self::Children => "child::",
            Self::SelfNode => "self::",
        }
    }
}

/// Options controlling how a selector is compiled to XPath.
///
/// # Example
/// ```
/// use fennec_selector::{CompileOptions, ContextMode, to_xpath_with};
///
/// let options = CompileOptions::new().with_context(ContextMode::Children).html();
/// assert_eq!(to_xpath_with("LI", &options).unwrap(), "child::li");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CompileOptions {
    /// Where the first step of each selector starts.
    pub context: ContextMode,
    /// Lowercase element and attribute names, for HTML documents whose DOM
    /// stores names in lowercase.
    pub lowercase_names: bool,
}

impl CompileOptions {
    /// Default options: document context, names as written.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            context: ContextMode::Document,
            lowercase_names: false,
        }
    }

    /// Set the context mode.
    #[must_use]
    pub const fn with_context(mut self, context: ContextMode) -> Self {
        self.context = context;
        self
    }

    /// Enable HTML name handling.
    #[must_use]
    pub const fn html(mut self) -> Self {
        self.lowercase_names = true;
        self
    }
}
