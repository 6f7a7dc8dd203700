//! Block-delimited single-file components: one `<template>` block.

use regex::Regex;
use std::sync::LazyLock;

use templex_scanner::{parse_attribute_token, split_attributes, AstAttribute};

use crate::plugin::{ExtractedTemplate, ParserPlugin};

static TEMPLATE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<template(\s[^>]*)?>").unwrap());

static TEMPLATE_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</template>").unwrap());

/// Locator for files with a single named template block. Yields the text
/// strictly between the opening and closing tags, untrimmed; without a
/// closing tag the block runs to the end of the source.
pub struct Vue;

impl ParserPlugin for Vue {
    fn extract_templates(&self, source: &str) -> Vec<ExtractedTemplate> {
        let Some(open) = TEMPLATE_OPEN.find(source) else {
            return Vec::new();
        };
        let open_end = open.end();
        let close_start = TEMPLATE_CLOSE
            .find(&source[open_end..])
            .map(|close| open_end + close.start())
            .unwrap_or(source.len());

        vec![ExtractedTemplate {
            template: source[open_end..close_start].to_string(),
            offset: open_end,
        }]
    }

    fn extract_attributes(&self, raw_attributes: &str, base_offset: usize) -> Vec<AstAttribute> {
        split_attributes(raw_attributes, base_offset)
            .iter()
            .map(|token| {
                let attribute = parse_attribute_token(token);
                // directive naming wins over value syntax here
                let computed = attribute.name.starts_with("v-")
                    || attribute.name.contains(':')
                    || attribute.name.contains('@');
                AstAttribute { computed, ..attribute }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_simple_template_block() {
        let code = "<template><div>Hello</div></template>";
        let templates = Vue.extract_templates(code);
        assert_eq!(
            templates,
            vec![ExtractedTemplate { template: "<div>Hello</div>".to_string(), offset: 10 }]
        );
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(Vue.extract_templates(""), vec![]);
    }

    #[test]
    fn test_no_template_block() {
        assert_eq!(Vue.extract_templates("<script>let x;</script>"), vec![]);
    }

    #[test]
    fn test_block_body_kept_untrimmed() {
        let code = "<template>\n  <p>First</p>\n  <span>Second</span>\n</template>\n";
        let templates = Vue.extract_templates(code);
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].template, "\n  <p>First</p>\n  <span>Second</span>\n");
        assert_eq!(templates[0].offset, 10);
    }

    #[test]
    fn test_missing_close_runs_to_end() {
        let code = "<template><div>x</div>";
        let templates = Vue.extract_templates(code);
        assert_eq!(templates[0].template, "<div>x</div>");
    }

    #[test]
    fn test_open_tag_with_attributes() {
        let code = "<template lang=\"pug\"><i>x</i></template>";
        let templates = Vue.extract_templates(code);
        assert_eq!(templates[0].template, "<i>x</i>");
        assert_eq!(templates[0].offset, code.find("<i>").unwrap());
    }

    #[test]
    fn test_case_insensitive_tags() {
        let code = "<TEMPLATE><b>x</b></TEMPLATE>";
        let templates = Vue.extract_templates(code);
        assert_eq!(templates[0].template, "<b>x</b>");
    }

    // =========================================================================
    // Attributes: directive names set `computed`, value syntax does not
    // =========================================================================

    #[test]
    fn test_static_attributes_not_computed() {
        let attributes = Vue.extract_attributes("attr=\"value\" attr2='value2'", 0);
        assert!(!attributes[0].computed);
        assert!(!attributes[1].computed);
    }

    #[test]
    fn test_v_bind_directives() {
        let attributes = Vue.extract_attributes("v-bind:attr=\"expr\" :prop=\"expr2\"", 0);
        assert_eq!(attributes[0].name, "v-bind:attr");
        assert!(attributes[0].computed);
        assert_eq!(attributes[1].name, ":prop");
        assert!(attributes[1].computed);
    }

    #[test]
    fn test_v_on_directives() {
        let attributes = Vue.extract_attributes("v-on:click=\"handler\" @submit=\"submit\"", 0);
        assert!(attributes[0].computed);
        assert_eq!(attributes[1].name, "@submit");
        assert!(attributes[1].computed);
    }

    #[test]
    fn test_v_model_directive() {
        let attributes = Vue.extract_attributes("v-model=\"username\"", 0);
        assert_eq!(attributes[0].name, "v-model");
        assert!(attributes[0].computed);
        assert_eq!(attributes[0].value.as_deref(), Some("\"username\""));
    }

    #[test]
    fn test_boolean_attribute_not_computed() {
        let attributes = Vue.extract_attributes("disabled", 0);
        assert_eq!(attributes[0].value, None);
        assert!(!attributes[0].computed);
    }
}
