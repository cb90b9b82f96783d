//! Caller-side mapping from styled text fragments to tree leaves.

use htmltree::{LeafNode, TextNode, TextType};

/// Map a styled text fragment to the leaf that renders it.
///
/// Link leaves read the fragment's URL as `href`; image leaves carry an
/// empty value with `src`/`alt` attributes. A missing URL becomes an empty
/// attribute value.
pub(crate) fn text_to_leaf(node: &TextNode) -> LeafNode {
    match node.text_type {
        TextType::Normal => LeafNode::new(None, node.text.as_str()),
        TextType::Bold => LeafNode::new(Some("b"), node.text.as_str()),
        TextType::Italic => LeafNode::new(Some("i"), node.text.as_str()),
        TextType::Code => LeafNode::new(Some("code"), node.text.as_str()),
        TextType::Link => LeafNode::new(Some("a"), node.text.as_str())
            .with_attrs([("href", node.url.clone().unwrap_or_default())]),
        TextType::Image => LeafNode::new(Some("img"), "").with_attrs([
            ("src", node.url.clone().unwrap_or_default()),
            ("alt", node.text.clone()),
        ]),
    }
}
