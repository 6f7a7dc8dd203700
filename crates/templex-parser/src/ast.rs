//! Position-annotated tree for parsed template regions.
//!
//! Two node kinds only: elements and non-blank text runs. Every `loc` is a
//! byte range into the normalized source the region was extracted from, so
//! `&source[loc.start..loc.end]` recovers the node's original text.

use serde::Serialize;
use templex_scanner::{AstAttribute, Loc};

/// A node in a parsed template tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum AstNode {
    Element(Element),
    Text(Text),
}

impl AstNode {
    /// The node's span in the normalized source.
    pub fn loc(&self) -> Loc {
        match self {
            AstNode::Element(element) => element.loc,
            AstNode::Text(text) => text.loc,
        }
    }

    /// The source text the node covers.
    pub fn raw(&self) -> &str {
        match self {
            AstNode::Element(element) => &element.raw,
            AstNode::Text(text) => &text.raw,
        }
    }
}

/// An element with its attributes and children.
///
/// `loc` runs from the opening `<` to the end of the matching close tag, or
/// to the end of the open tag when the element is self-closing or void.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<AstAttribute>,
    pub children: Vec<AstNode>,
    pub loc: Loc,
    pub raw: String,
}

/// A run of character data. Runs that are entirely whitespace are never
/// emitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub loc: Loc,
    pub raw: String,
}
