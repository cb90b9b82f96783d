//! Parent nodes: a tag and children, no direct value.

use std::fmt::Write;

use crate::attrs::AttrMap;
use crate::error::RenderError;
use crate::node::Node;

/// An interior tree node wrapping one or more children in a tag.
///
/// A parent exclusively owns its children; rendering visits them in order
/// and concatenates their output inside the opening/closing tag. Validation
/// is deferred to [`render`](Node::render): an empty tag fails with
/// [`RenderError::MissingTag`] and an empty child list with
/// [`RenderError::MissingChildren`].
///
/// Attributes are stored and observable through
/// [`attributes`](Node::attributes), but parents do not emit them; only
/// leaves render their attribute fragment.
#[derive(Debug)]
pub struct ParentNode {
    /// Wrapping tag name. Must be non-empty at render time.
    pub tag: String,
    /// Child nodes, rendered in order. Must be non-empty at render time.
    pub children: Vec<Box<dyn Node>>,
    /// Tag attributes. Absent is distinct from present-but-empty.
    pub attrs: Option<AttrMap>,
}

impl ParentNode {
    /// Create a parent wrapping the given children.
    #[must_use]
    pub fn new(tag: impl Into<String>, children: Vec<Box<dyn Node>>) -> Self {
        Self {
            tag: tag.into(),
            children,
            attrs: None,
        }
    }

    /// Attach attributes, replacing any set previously.
    #[must_use]
    pub fn with_attrs(mut self, attrs: impl Into<AttrMap>) -> Self {
        self.attrs = Some(attrs.into());
        self
    }

    /// Box this parent for use as a child of another tree.
    #[must_use]
    pub fn boxed(self) -> Box<dyn Node> {
        Box::new(self)
    }
}

impl Node for ParentNode {
    fn attributes(&self) -> Option<&AttrMap> {
        self.attrs.as_ref()
    }

    fn render(&self) -> Result<String, RenderError> {
        if self.tag.is_empty() {
            return Err(RenderError::MissingTag);
        }
        if self.children.is_empty() {
            return Err(RenderError::MissingChildren);
        }

        let mut out = String::new();
        write!(out, "<{}>", self.tag).unwrap();
        for child in &self.children {
            out.push_str(&child.render()?);
        }
        write!(out, "</{}>", self.tag).unwrap();
        Ok(out)
    }
}
