//! Sample driver for the `htmltree` crate.
//!
//! Authors a handful of styled text fragments, maps them to tree leaves,
//! assembles a small page, and prints the rendered HTML.

mod convert;
mod error;
mod output;

use clap::Parser;
use htmltree::{LeafNode, Node, ParentNode, TextNode, TextType};
use tracing_subscriber::EnvFilter;

use convert::text_to_leaf;
use error::DemoError;
use output::Output;

/// Render a sample HTML document.
#[derive(Parser)]
#[command(name = "htmltree-demo", version, about)]
struct Cli {
    /// Enable verbose logging.
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = run(&output) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

fn run(output: &Output) -> Result<(), DemoError> {
    // Styled fragments compare structurally: same fields, same node.
    let first = TextNode::with_url("Project homepage", TextType::Link, "https://example.com");
    let second = TextNode::with_url("Project homepage", TextType::Link, "https://example.com");
    let third = TextNode::with_url("Project homepage", TextType::Image, "https://example.com");

    output.highlight("Text nodes");
    output.info(&format!("{first} == {second}: {}", first == second));
    output.info(&format!("{first} == {third}: {}", first == third));

    let intro = [
        TextNode::new("This page is assembled from ", TextType::Normal),
        TextNode::new("styled", TextType::Bold),
        TextNode::new(" text fragments and rendered with ", TextType::Normal),
        TextNode::new("render()", TextType::Code),
        TextNode::new(" calls on ", TextType::Normal),
        TextNode::new("leaf", TextType::Italic),
        TextNode::new(" nodes.", TextType::Normal),
    ];

    let paragraph = ParentNode::new(
        "p",
        intro.iter().map(|node| text_to_leaf(node).boxed()).collect(),
    );

    let figure = TextNode::with_url(
        "A sample diagram",
        TextType::Image,
        "https://example.com/diagram.png",
    );

    let page = ParentNode::new(
        "article",
        vec![
            LeafNode::new(Some("h1"), "htmltree demo").boxed(),
            paragraph.boxed(),
            text_to_leaf(&first).boxed(),
            text_to_leaf(&figure).boxed(),
        ],
    );

    let html = page.render()?;
    tracing::debug!(bytes = html.len(), "rendered sample page");

    output.highlight("Rendered page");
    output.info(&html);
    Ok(())
}
