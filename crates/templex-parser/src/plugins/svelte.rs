//! Multi-region component files: markup is whatever remains once the
//! script and style blocks are removed.

use regex::Regex;
use std::sync::LazyLock;

use templex_scanner::{parse_attribute_token, split_attributes, AstAttribute};

use crate::plugin::{ExtractedTemplate, ParserPlugin};

static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script(\s[^>]*)?>.*?</script\s*>").unwrap());

static STYLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style(\s[^>]*)?>.*?</style\s*>").unwrap());

/// Locator for files whose markup sits alongside script/style blocks.
///
/// The reported offset is the length of the original source's leading
/// whitespace. When a removed block precedes the markup the offset keeps
/// pointing at where that block began, not at the first retained character;
/// downstream spans are only exact when the markup comes first.
pub struct Svelte;

impl ParserPlugin for Svelte {
    fn extract_templates(&self, source: &str) -> Vec<ExtractedTemplate> {
        let without_scripts = SCRIPT_BLOCK.replace_all(source, "");
        let markup = STYLE_BLOCK.replace_all(&without_scripts, "");
        let trimmed = markup.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        let offset = source.len() - source.trim_start().len();
        vec![ExtractedTemplate { template: trimmed.to_string(), offset }]
    }

    fn extract_attributes(&self, raw_attributes: &str, base_offset: usize) -> Vec<AstAttribute> {
        split_attributes(raw_attributes, base_offset)
            .iter()
            .map(parse_attribute_token)
            .collect()
    }
}
