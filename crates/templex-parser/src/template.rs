//! Tag-level template reader.
//!
//! A recursive pass over one located template region. Elements and
//! non-blank text runs become nodes; the interior of each opening tag is
//! handed to the active strategy for attribute extraction, and child
//! content is read by recursing into the reader itself.
//!
//! The reader never validates: stray close tags are skipped, a close tag
//! for an ancestor hands control back up the stack, an unmatched open tag
//! ends at the end of its children, and every input produces some tree.

use templex_scanner::{skip_braced, skip_quoted, Loc};

use crate::ast::{AstNode, Element, Text};
use crate::plugin::ParserPlugin;
use crate::void::is_void_element;

fn is_tag_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b':' || byte == b'_' || byte == b'-'
}

/// Parses one template region into a sequence of nodes.
///
/// Every emitted offset is `base_offset` plus the local byte index, so node
/// spans stay expressed in the coordinates of the source the region was
/// extracted from, however many extraction or recursion layers are above.
pub fn parse_template(
    input: &str,
    strategy: &dyn ParserPlugin,
    base_offset: usize,
) -> Vec<AstNode> {
    let bytes = input.as_bytes();
    let mut nodes = Vec::new();
    let mut position = 0;

    while position < bytes.len() {
        if bytes[position] == b'<' {
            if bytes.get(position + 1) == Some(&b'/') {
                // stray close tag at this level: skip past its `>`
                position = match input[position + 2..].find('>') {
                    Some(gt) => position + 2 + gt + 1,
                    None => bytes.len(),
                };
                continue;
            }

            let tag_start = position;
            position += 1;

            let name_start = position;
            while position < bytes.len() && is_tag_name_byte(bytes[position]) {
                position += 1;
            }
            let tag_name = &input[name_start..position];

            // scan to the open tag's terminator; quoted and braced spans
            // are opaque, so a `>` inside a value never ends the tag
            let attrs_start = position;
            let mut self_closing = false;
            while position < bytes.len() {
                match bytes[position] {
                    b'"' | b'\'' => position = skip_quoted(bytes, position),
                    b'{' => position = skip_braced(bytes, position),
                    b'>' => {
                        position += 1;
                        break;
                    }
                    b'/' if bytes.get(position + 1) == Some(&b'>') => {
                        self_closing = true;
                        position += 2;
                        break;
                    }
                    _ => position += 1,
                }
            }
            let tag_open_end = position;

            let mut attrs_end = tag_open_end
                .saturating_sub(if self_closing { 2 } else { 1 })
                .max(attrs_start);
            while attrs_end > attrs_start && !input.is_char_boundary(attrs_end) {
                attrs_end -= 1;
            }
            let attributes = strategy
                .extract_attributes(&input[attrs_start..attrs_end], base_offset + attrs_start);

            if self_closing || is_void_element(tag_name) {
                nodes.push(AstNode::Element(Element {
                    tag: tag_name.to_string(),
                    attributes,
                    children: Vec::new(),
                    loc: Loc::new(base_offset + tag_start, base_offset + tag_open_end),
                    raw: input[tag_start..tag_open_end].to_string(),
                }));
                continue;
            }

            let (children, child_end) =
                read_children(input, position, tag_name, strategy, base_offset);
            position = child_end;

            // consume the close tag only when it names this element; a
            // foreign close tag bubbles up to the matching ancestor
            let mut close_end = position;
            if input[position..].starts_with("</")
                && input[position + 2..].starts_with(tag_name)
            {
                close_end = match input[position + 2..].find('>') {
                    Some(gt) => position + 2 + gt + 1,
                    None => bytes.len(),
                };
                position = close_end;
            }

            nodes.push(AstNode::Element(Element {
                tag: tag_name.to_string(),
                attributes,
                children,
                loc: Loc::new(base_offset + tag_start, base_offset + close_end),
                raw: input[tag_start..close_end].to_string(),
            }));
            continue;
        }

        let text_start = position;
        let text_end = input[position..]
            .find('<')
            .map(|lt| position + lt)
            .unwrap_or(bytes.len());
        let raw = &input[text_start..text_end];
        if !raw.trim().is_empty() {
            nodes.push(AstNode::Text(Text {
                loc: Loc::new(base_offset + text_start, base_offset + text_end),
                raw: raw.to_string(),
            }));
        }
        position = text_end;
    }

    nodes
}

/// Reads child nodes starting at `from` until the close tag for
/// `tag_name`, a close tag for an ancestor (handed back to the caller), or
/// the end of input. Returns the children and the index reading stopped at.
fn read_children(
    input: &str,
    from: usize,
    tag_name: &str,
    strategy: &dyn ParserPlugin,
    base_offset: usize,
) -> (Vec<AstNode>, usize) {
    let bytes = input.as_bytes();
    let close_prefix = format!("</{tag_name}");
    let mut children = Vec::new();
    let mut position = from;

    while position < bytes.len() {
        if input[position..].starts_with(&close_prefix) {
            break;
        }
        if bytes[position] == b'<' {
            if bytes.get(position + 1) == Some(&b'/') {
                // close tag for an ancestor: hand control back up
                break;
            }
            let nested = parse_template(&input[position..], strategy, base_offset + position);
            if let Some(node) = nested.into_iter().next() {
                position += node.raw().len();
                children.push(node);
                continue;
            }
        }

        let text_start = position;
        let text_end = input[position..]
            .find('<')
            .map(|lt| position + lt)
            .unwrap_or(bytes.len());
        let raw = &input[text_start..text_end];
        if !raw.trim().is_empty() {
            children.push(AstNode::Text(Text {
                loc: Loc::new(base_offset + text_start, base_offset + text_end),
                raw: raw.to_string(),
            }));
        }
        position = text_end;
    }

    (children, position)
}
