//! Plain markup: the whole file is one template.

use templex_scanner::{parse_attribute_token, split_attributes, AstAttribute};

use crate::plugin::{ExtractedTemplate, ParserPlugin};

/// Identity strategy for plain markup files.
pub struct Html;

impl ParserPlugin for Html {
    fn extract_templates(&self, source: &str) -> Vec<ExtractedTemplate> {
        if source.trim().is_empty() {
            return Vec::new();
        }
        vec![ExtractedTemplate {
            template: source.to_string(),
            offset: 0,
        }]
    }

    fn extract_attributes(&self, raw_attributes: &str, base_offset: usize) -> Vec<AstAttribute> {
        split_attributes(raw_attributes, base_offset)
            .iter()
            .map(parse_attribute_token)
            .collect()
    }
}
