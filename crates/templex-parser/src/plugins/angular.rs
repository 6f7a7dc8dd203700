//! Component-decorator files: inline `template:` literals inside a
//! decorator-based component definition, or plain markup otherwise.

use regex::Regex;
use std::sync::LazyLock;

use templex_scanner::{parse_attribute_token, split_attributes, AstAttribute};

use crate::plugin::{ExtractedTemplate, ParserPlugin};

static DECORATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@Component\s*\(").unwrap());

static COMPONENT_IMPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"import\s+\{?\s*Component").unwrap());

static INLINE_TEMPLATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)template\s*:\s*(?:`(.*?)`|'(.*?)'|"(.*?)")"#).unwrap()
});

/// Locator for decorator-based component files.
///
/// A file that looks like a component definition yields one template per
/// inline `template:` literal and nothing at all when every template is
/// external. Any other file is treated as plain markup.
pub struct Angular;

impl ParserPlugin for Angular {
    fn extract_templates(&self, source: &str) -> Vec<ExtractedTemplate> {
        let code = source.trim();
        if code.is_empty() {
            return Vec::new();
        }

        if DECORATOR.is_match(code) || COMPONENT_IMPORT.is_match(code) {
            let mut results = Vec::new();
            for captures in INLINE_TEMPLATE.captures_iter(source) {
                let inner = captures
                    .get(1)
                    .or_else(|| captures.get(2))
                    .or_else(|| captures.get(3));
                let Some(inner) = inner else { continue };
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
            return results;
        }

        let offset = source.len() - source.trim_start().len();
        vec![ExtractedTemplate { template: code.to_string(), offset }]
    }

    fn extract_attributes(&self, raw_attributes: &str, base_offset: usize) -> Vec<AstAttribute> {
        split_attributes(raw_attributes, base_offset)
            .iter()
            .map(parse_attribute_token)
            .collect()
    }
}
