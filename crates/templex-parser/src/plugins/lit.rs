//! Tagged-template markup: `html`-tagged template literals.

use regex::Regex;
use std::sync::LazyLock;

use templex_scanner::{parse_attribute_token, split_attributes, AstAttribute};

use crate::plugin::{ExtractedTemplate, ParserPlugin};

static TAGGED_TEMPLATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"html`([^`]*)`").unwrap());

fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'$'
}

/// Locator for `html`-tagged template literals. A literal tagged by a
/// longer identifier that merely ends in `html` is not a match.
pub struct Lit;

impl ParserPlugin for Lit {
    fn extract_templates(&self, source: &str) -> Vec<ExtractedTemplate> {
        let bytes = source.as_bytes();
        let mut results = Vec::new();

        for captures in TAGGED_TEMPLATE.captures_iter(source) {
            let Some(inner) = captures.get(1) else { continue };
            let tag_start = inner.start() - "html`".len();
            if tag_start > 0 && is_ident_byte(bytes[tag_start - 1]) {
                continue;
            }
            let trimmed = inner.as_str().trim();
            if trimmed.is_empty() {
                continue;
            }
            let leading = inner.as_str().len() - inner.as_str().trim_start().len();
            results.push(ExtractedTemplate {
                template: trimmed.to_string(),
                offset: inner.start() + leading,
            });
        }

        results
    }

    fn extract_attributes(&self, raw_attributes: &str, base_offset: usize) -> Vec<AstAttribute> {
        split_attributes(raw_attributes, base_offset)
            .iter()
            .map(parse_attribute_token)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_simple_tagged_literal() {
        let code = "const MyComponent = () => html`<div>Hello</div>`";
        let templates = Lit.extract_templates(code);
        assert_eq!(
            templates,
            vec![ExtractedTemplate { template: "<div>Hello</div>".to_string(), offset: 31 }]
        );
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(Lit.extract_templates(""), vec![]);
    }

    #[test]
    fn test_multiple_literals() {
        let code = "const A = () => html`<p>First</p>`;\nconst B = () => html`<span>Second</span>`;\n";
        let templates = Lit.extract_templates(code);
        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].template, "<p>First</p>");
        assert_eq!(templates[0].offset, code.find("<p>").unwrap());
        assert_eq!(templates[1].template, "<span>Second</span>");
        assert_eq!(templates[1].offset, code.find("<span>").unwrap());
    }

    #[test]
    fn test_longer_identifier_not_matched() {
        assert_eq!(Lit.extract_templates("myhtml`<div>x</div>`"), vec![]);
        assert_eq!(Lit.extract_templates("xhtml`<div>x</div>`"), vec![]);
    }

    #[test]
    fn test_literal_at_start_of_source() {
        let templates = Lit.extract_templates("html`<b>x</b>`");
        assert_eq!(templates[0].offset, 5);
    }

    #[test]
    fn test_trim_shifts_offset() {
        let code = "html`\n  <p>x</p>\n`";
        let templates = Lit.extract_templates(code);
        assert_eq!(templates[0].template, "<p>x</p>");
        assert_eq!(templates[0].offset, code.find("<p>").unwrap());
    }

    #[test]
    fn test_whitespace_only_literal_skipped() {
        assert_eq!(Lit.extract_templates("html`   `"), vec![]);
    }

    #[test]
    fn test_property_binding_attributes() {
        let attributes = Lit.extract_attributes(".prop=${value} @event=${handler}", 0);
        assert_eq!(attributes[0].name, ".prop");
        assert_eq!(attributes[0].value.as_deref(), Some("${value}"));
        assert!(attributes[0].computed);
        assert_eq!(attributes[1].name, "@event");
        assert!(attributes[1].computed);
    }

    #[test]
    fn test_quoted_interpolation_is_computed() {
        let attributes = Lit.extract_attributes("class=\"foo ${bar ? 'a' : 'b'}\"", 0);
        assert_eq!(attributes.len(), 1);
        assert!(attributes[0].computed);
        assert_eq!(attributes[0].value.as_deref(), Some("\"foo ${bar ? 'a' : 'b'}\""));
    }

    #[test]
    fn test_static_attribute_not_computed() {
        let attributes = Lit.extract_attributes("attr=\"value\"", 0);
        assert!(!attributes[0].computed);
    }
}
