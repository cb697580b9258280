//! Fennec CLI
//!
//! Compiles CSS selectors to XPath, or dumps their tokens or selector tree.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use fennec_selector::{CompileOptions, ContextMode, SelectorError, XPathBuilder, parse, tokenize};
use owo_colors::OwoColorize;

/// Fennec: compile CSS selectors to XPath 1.0
#[derive(Parser, Debug)]
#[command(name = "fennec")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Compile a selector for a whole document
    fennec 'ul > li:nth-child(2n+1)'

    # Compile relative to a context node, with HTML name handling
    fennec --context children --html 'DIV.note'

    # Show how a selector is tokenized
    fennec --tokens 'a[href^="https"]'

    # Tokens as JSON
    fennec --json '#main .item'
"#)]
struct Cli {
    /// Selectors to compile
    #[arg(value_name = "SELECTOR", required = true)]
    selectors: Vec<String>,

    /// Where the first location step starts
    #[arg(short, long, value_enum, default_value_t = Context::Document)]
    context: Context,

    /// Lowercase element and attribute names (HTML documents)
    #[arg(long)]
    html: bool,

    /// Print the token list instead of XPath
    #[arg(long)]
    tokens: bool,

    /// Print the token list as JSON
    #[arg(long, conflicts_with = "tokens")]
    json: bool,

    /// Print the parsed selector tree instead of XPath
    #[arg(long, conflicts_with_all = ["tokens", "json"])]
    ast: bool,
}

/// Command-line names for [`ContextMode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Context {
    /// `//div`
    Document,
    /// `descendant::div`
    Descendant,
    /// `child::div`
    Children,
    /// `self::div`
    #[value(name = "self")]
    SelfNode,
}

impl From<Context> for ContextMode {
    fn from(context: Context) -> Self {
        match context {
            Context::Document => Self::Document,
            Context::Descendant => Self::Descendant,
            Context::Children => Self::Children,
            Context::SelfNode => Self::SelfNode,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut options = CompileOptions::new().with_context(cli.context.into());
    if cli.html {
        options = options.html();
    }

    for selector in &cli.selectors {
        if let Err(error) = compile(&cli, &options, selector) {
            match error.downcast_ref::<SelectorError>() {
                Some(selector_error) => report(selector, selector_error),
                None => return Err(error),
            }
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Print one selector in the requested output mode
fn compile(cli: &Cli, options: &CompileOptions, selector: &str) -> Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&tokenize(selector)?)?);
    } else if cli.tokens {
        for token in tokenize(selector)? {
            println!("{token}");
        }
    } else if cli.ast {
        println!("{:#?}", parse(selector)?);
    } else {
        println!("{}", XPathBuilder::new(*options).build(&parse(selector)?));
    }
    Ok(())
}

/// Print a selector error, with a caret under the offending offset
fn report(selector: &str, error: &SelectorError) {
    eprintln!("{} {error}", "error:".red().bold());
    if let Some(offset) = error.offset() {
        let column = selector
            .get(..offset)
            .map_or(offset, |prefix| prefix.chars().count());
        eprintln!("  {selector}");
        eprintln!("  {}{}", " ".repeat(column), "^".red());
    }
}
