//! Standalone styled-text values for content authoring.
//!
//! A [`TextNode`] is not part of the render tree. It carries a fragment of
//! inline text with its semantic styling, and callers map it to a
//! [`LeafNode`](crate::LeafNode) (e.g. bold text to a `<b>` leaf) when
//! assembling a document.

use std::fmt;

/// Semantic styling applied to a text fragment.
///
/// Ordinals are stable and appear in the display form of [`TextNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TextType {
    /// Bold text.
    Bold = 0,
    /// Plain, unstyled text.
    Normal = 1,
    /// Italic text.
    Italic = 2,
    /// Inline code.
    Code = 3,
    /// A hyperlink; the node's `url` is the destination.
    Link = 4,
    /// An image; the node's `url` is the source and the text the alt text.
    Image = 5,
}

impl TextType {
    /// Stable ordinal used in the display form of [`TextNode`].
    #[must_use]
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

/// An inline styled-text fragment.
///
/// `url` is meaningful only for [`TextType::Link`] and [`TextType::Image`];
/// the type does not enforce this, callers are responsible. Equality is
/// structural over all three fields.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextNode {
    /// The text content.
    pub text: String,
    /// Semantic styling of the text.
    pub text_type: TextType,
    /// Destination or source URL, for link and image nodes.
    pub url: Option<String>,
}

impl TextNode {
    /// Create a text node without a URL.
    #[must_use]
    pub fn new(text: impl Into<String>, text_type: TextType) -> Self {
        Self {
            text: text.into(),
            text_type,
            url: None,
        }
    }

    /// Create a text node carrying a URL.
    #[must_use]
    pub fn with_url(
        text: impl Into<String>,
        text_type: TextType,
        url: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            text_type,
            url: Some(url.into()),
        }
    }
}

impl fmt::Display for TextNode {
    /// Deterministic debugging form: `TextNode(<text>, <ordinal>, <url>)`,
    /// with the literal marker `None` for an absent URL.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TextNode({}, {}, ", self.text, self.text_type.ordinal())?;
        match &self.url {
            Some(url) => write!(f, "{url})"),
            None => write!(f, "None)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn equal_when_all_fields_match() {
        let a = TextNode::new("Plain text", TextType::Normal);
        let b = TextNode::new("Plain text", TextType::Normal);
        assert_eq!(a, b);

        let c = TextNode::with_url("Search", TextType::Link, "https://www.google.com");
        let d = TextNode::with_url("Search", TextType::Link, "https://www.google.com");
        assert_eq!(c, d);
    }

    #[test]
    fn unequal_when_text_differs() {
        let a = TextNode::new("Plain text", TextType::Normal);
        let b = TextNode::new("Other text", TextType::Normal);
        assert_ne!(a, b);
    }

    #[test]
    fn unequal_when_type_differs() {
        let a = TextNode::new("Same text", TextType::Normal);
        let b = TextNode::new("Same text", TextType::Bold);
        assert_ne!(a, b);
    }

    #[test]
    fn unequal_when_url_differs() {
        let a = TextNode::with_url("Search", TextType::Link, "https://www.google.com");
        let b = TextNode::with_url("Search", TextType::Link, "https://www.youtube.com");
        assert_ne!(a, b);

        let c = TextNode::new("Search", TextType::Link);
        assert_ne!(a, c);
    }

    #[test]
    fn ordinals_are_stable() {
        assert_eq!(TextType::Bold.ordinal(), 0);
        assert_eq!(TextType::Normal.ordinal(), 1);
        assert_eq!(TextType::Italic.ordinal(), 2);
        assert_eq!(TextType::Code.ordinal(), 3);
        assert_eq!(TextType::Link.ordinal(), 4);
        assert_eq!(TextType::Image.ordinal(), 5);
    }

    #[test]
    fn display_without_url() {
        let node = TextNode::new("Bold text", TextType::Bold);
        assert_eq!(node.to_string(), "TextNode(Bold text, 0, None)");
    }

    #[test]
    fn display_with_url() {
        let node = TextNode::with_url("Search", TextType::Link, "https://www.google.com");
        assert_eq!(
            node.to_string(),
            "TextNode(Search, 4, https://www.google.com)"
        );
    }

    #[test]
    fn display_with_empty_text() {
        let node = TextNode::new("", TextType::Normal);
        assert_eq!(node.to_string(), "TextNode(, 1, None)");
    }

    #[test]
    fn url_is_kept_on_non_link_types() {
        // Not enforced by the type; callers decide what it means.
        let node = TextNode::with_url("Text with URL", TextType::Normal, "https://example.com");
        assert_eq!(node.url.as_deref(), Some("https://example.com"));
    }
}
