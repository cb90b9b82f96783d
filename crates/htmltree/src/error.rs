//! Error types for tree rendering.

/// Error from rendering a node tree.
///
/// Construction of nodes is permissive; all validation happens when
/// [`render`](crate::Node::render) is called.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    /// `render` was invoked through the trait default instead of a concrete
    /// node type.
    #[error("render is not implemented for this node type")]
    Unimplemented,

    /// A leaf node was rendered without a value.
    #[error("leaf node must have a value")]
    MissingValue,

    /// A parent node was rendered without a tag.
    #[error("parent node must have a tag")]
    MissingTag,

    /// A parent node was rendered without children.
    #[error("parent node must have children")]
    MissingChildren,
}
