//! Inline-expression markup: heuristic boundary search for markup embedded
//! directly in expression code.

use regex::Regex;
use std::sync::LazyLock;

use templex_scanner::{parse_attribute_token, split_attributes, AstAttribute};

use crate::comments::blank;
use crate::plugin::{ExtractedTemplate, ParserPlugin};

/// How far back the boundary heuristic looks when deciding whether a `<`
/// opens markup or belongs to a comparison/generic.
const LOOKBEHIND: usize = 25;

static SOURCE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s:/\*.*?\*/)|//[^\n]*").unwrap());

static ENDS_WITH_IDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9A-Za-z_]\s*$").unwrap());

static ENDS_WITH_RETURN_OR_ARROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:return|=>)\s*$").unwrap());

/// Replaces `/* ... */` and `// ...` comments with same-length whitespace
/// so comment text can neither fake nor hide a markup boundary, while every
/// byte offset stays valid.
fn blank_source_comments(source: &str) -> String {
    SOURCE_COMMENT
        .replace_all(source, |captures: &regex::Captures| blank(&captures[0]))
        .into_owned()
}

fn is_tag_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b'_' | b':' | b'-')
}

fn trim_template_end(fragment: &str) -> &str {
    fragment.trim_end_matches(|c: char| c.is_whitespace() || c == ';')
}

/// A `<` opens markup when it sits at the start of the text, after
/// whitespace or `(`, or after `return`/`=>`. A `<` trailing an identifier
/// is a comparison or generic unless `return`/`=>` immediately precedes it.
fn is_markup_boundary(code: &str, lt: usize) -> bool {
    if lt == 0 {
        return true;
    }
    let mut window_start = lt.saturating_sub(LOOKBEHIND);
    while !code.is_char_boundary(window_start) {
        window_start += 1;
    }
    let window = &code[window_start..lt];
    let previous = code.as_bytes()[lt - 1];

    let after_keyword = ENDS_WITH_RETURN_OR_ARROW.is_match(window);
    if !(previous.is_ascii_whitespace() || previous == b'(' || after_keyword) {
        return false;
    }
    !(ENDS_WITH_IDENT.is_match(window) && !after_keyword)
}

/// Locator for markup written inline in expression code.
///
/// Candidate boundaries are found heuristically, then each candidate is
/// grown to a balanced span by counting nested open tags of the same name
/// against their close tag (`</>` for a fragment). The scan resumes past
/// each extracted span. When nothing matches, everything from the first `<`
/// to the end of the file is one best-effort template.
pub struct Jsx;

impl ParserPlugin for Jsx {
    fn extract_templates(&self, source: &str) -> Vec<ExtractedTemplate> {
        let code = blank_source_comments(source);
        let bytes = code.as_bytes();
        let len = bytes.len();
        let mut results = Vec::new();
        let mut search = 0;

        while search < len {
            let Some(rel) = code[search..].find('<') else { break };
            let lt = search + rel;
            search = lt + 1;

            if !is_markup_boundary(&code, lt) {
                continue;
            }

            // tag name: dotted and namespaced identifiers allowed
            let mut name_end = lt + 1;
            while name_end < len && is_tag_byte(bytes[name_end]) {
                name_end += 1;
            }
            let tag_name = &code[lt + 1..name_end];
            let fragment = tag_name.is_empty() || tag_name == "React.Fragment";
            if !fragment && !bytes[lt + 1].is_ascii_alphabetic() {
                continue;
            }

            let open_pattern = format!("<{tag_name}");
            let close_pattern = if fragment {
                "</>".to_string()
            } else {
                format!("</{tag_name}>")
            };

            let mut depth = 0u32;
            let mut cursor = name_end;
            while cursor < len {
                if !fragment && code[cursor..].starts_with(&open_pattern) {
                    depth += 1;
                    cursor += open_pattern.len();
                    continue;
                }
                if code[cursor..].starts_with(&close_pattern) {
                    if depth == 0 {
                        // both close patterns end in `>`
                        let close_gt = cursor + close_pattern.len() - 1;
                        let template = trim_template_end(&code[lt..close_gt + 1]);
                        results.push(ExtractedTemplate {
                            template: template.to_string(),
                            offset: lt,
                        });
                        let after = &code[close_gt + 1..];
                        let trailing = after.len()
                            - after
                                .trim_start_matches(|c: char| c.is_whitespace() || c == ';')
                                .len();
                        search = close_gt + 1 + trailing;
                        break;
                    }
                    depth -= 1;
                }
                cursor += 1;
            }
        }

        // fallback: no boundary matched, take everything from the first `<`
        if results.is_empty() {
            if let Some(first_lt) = code.find('<') {
                results.push(ExtractedTemplate {
                    template: trim_template_end(&code[first_lt..]).to_string(),
                    offset: first_lt,
                });
            }
        }

        results
    }

    fn extract_attributes(&self, raw_attributes: &str, base_offset: usize) -> Vec<AstAttribute> {
        split_attributes(raw_attributes, base_offset)
            .iter()
            .map(|token| {
                let attribute = parse_attribute_token(token);
                // a spread stays one token; surface it under a sentinel name
                if attribute.raw.starts_with("{...") {
                    return AstAttribute {
                        name: "{...spread}".to_string(),
                        value: None,
                        computed: true,
                        ..attribute
                    };
                }
                attribute
            })
            .collect()
    }
}
