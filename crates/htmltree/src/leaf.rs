//! Leaf nodes: a direct value, no children.

use crate::attrs::AttrMap;
use crate::error::RenderError;
use crate::node::Node;

/// A tree leaf holding a direct text value.
///
/// The tag is optional; an untagged leaf renders as its raw value.
/// Construction is permissive: a leaf without a value can be built, but
/// rendering it fails with [`RenderError::MissingValue`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafNode {
    /// Wrapping tag name. `None` renders the value bare.
    pub tag: Option<String>,
    /// Text content. Required at render time.
    pub value: Option<String>,
    /// Tag attributes. Empty when not supplied.
    pub attrs: AttrMap,
}

impl LeafNode {
    /// Create a leaf with an optional wrapping tag.
    #[must_use]
    pub fn new(tag: Option<&str>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.map(str::to_owned),
            value: Some(value.into()),
            attrs: AttrMap::new(),
        }
    }

    /// Attach attributes, replacing any set previously.
    #[must_use]
    pub fn with_attrs(mut self, attrs: impl Into<AttrMap>) -> Self {
        self.attrs = attrs.into();
        self
    }

    /// Box this leaf for use as a tree child.
    #[must_use]
    pub fn boxed(self) -> Box<dyn Node> {
        Box::new(self)
    }
}

impl Node for LeafNode {
    fn attributes(&self) -> Option<&AttrMap> {
        Some(&self.attrs)
    }

    fn render(&self) -> Result<String, RenderError> {
        let value = self.value.as_deref().ok_or(RenderError::MissingValue)?;
        let Some(tag) = self.tag.as_deref() else {
            return Ok(value.to_owned());
        };
        if self.attrs.is_empty() {
            Ok(format!("<{tag}>{value}</{tag}>"))
        } else {
            Ok(format!("<{tag}{}>{value}</{tag}>", self.attr_fragment()))
        }
    }
}
