//! HTML document tree with string rendering.
//!
//! This crate models a minimal HTML document as a tree of render-capable
//! nodes and turns that tree into an HTML string.
//!
//! # Architecture
//!
//! The [`Node`] trait is the shared capability, with two implementations:
//! - [`LeafNode`]: an optional tag around a required text value, no children
//! - [`ParentNode`]: a required tag around one or more child nodes
//!
//! [`TextNode`] is a separate, simpler model for authoring inline styled
//! text ([`TextType`]: bold, italic, code, link, image). It is not part of
//! the render tree; callers map it to leaves when assembling a document.
//!
//! Construction is permissive. Validation happens at render time and
//! surfaces as a [`RenderError`]. Inputs are trusted verbatim: no escaping
//! or sanitization is applied.
//!
//! # Example
//!
//! ```
//! use htmltree::{LeafNode, Node, ParentNode};
//!
//! let page = ParentNode::new(
//!     "article",
//!     vec![
//!         LeafNode::new(Some("h1"), "Title").boxed(),
//!         LeafNode::new(Some("a"), "Source")
//!             .with_attrs([("href", "https://example.com")])
//!             .boxed(),
//!     ],
//! );
//!
//! assert_eq!(
//!     page.render().unwrap(),
//!     r#"<article><h1>Title</h1><a href="https://example.com">Source</a></article>"#
//! );
//! ```

mod attrs;
mod error;
mod leaf;
mod node;
mod parent;
mod text;

pub use attrs::{AttrMap, render_attributes};
pub use error::RenderError;
pub use leaf::LeafNode;
pub use node::Node;
pub use parent::ParentNode;
pub use text::{TextNode, TextType};
