//! The render capability shared by all tree nodes.

use std::fmt;

use crate::attrs::{AttrMap, render_attributes};
use crate::error::RenderError;

/// A render-capable element of the HTML tree.
///
/// Implemented by [`LeafNode`](crate::LeafNode) and
/// [`ParentNode`](crate::ParentNode). The trait is object-safe; parents own
/// their children as `Box<dyn Node>`, so leaves and parents mix freely in
/// one tree.
///
/// The provided [`render`](Node::render) returns
/// [`RenderError::Unimplemented`] so that an implementor which never
/// supplies a concrete rendering fails loudly instead of producing output.
pub trait Node: fmt::Debug {
    /// Attribute mapping for this node.
    ///
    /// `None` means no mapping was supplied at all, which renders
    /// differently from a present-but-empty map (see [`render_attributes`]).
    fn attributes(&self) -> Option<&AttrMap>;

    /// Render this node and everything below it to an HTML string.
    fn render(&self) -> Result<String, RenderError> {
        Err(RenderError::Unimplemented)
    }

    /// Fragment spliced directly after the tag name when rendering.
    fn attr_fragment(&self) -> String {
        render_attributes(self.attributes())
    }
}
