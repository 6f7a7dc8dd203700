//! Templex parser
//!
//! Locates markup templates embedded in component source files and parses
//! each located region into a position-annotated tree of element and text
//! nodes, for tools that need to know exactly which byte ranges of a file
//! are markup.
//!
//! ```text
//! source → normalize → locate (strategy) → blank comments → read tags
//! ```
//!
//! The core is total: malformed or partial markup produces a best-effort
//! tree, "nothing found" is an empty vector, and no input raises an error.
//!
//! # Example
//!
//! ```
//! use templex_parser::{parse, AstNode};
//!
//! let trees = parse("<div class=\"box\">hi</div>");
//! assert_eq!(trees.len(), 1);
//! assert!(matches!(trees[0][0], AstNode::Element(_)));
//! ```

pub mod ast;
pub mod comments;
pub mod normalize;
pub mod plugin;
pub mod plugins;
pub mod template;
pub mod void;

pub use ast::{AstNode, Element, Text};
pub use comments::strip_comments;
pub use normalize::normalize;
pub use plugin::{ExtractedTemplate, Framework, ParserPlugin};
pub use template::parse_template;
pub use void::{is_void_element, VOID_ELEMENTS};

/// Error returned when a framework name does not match a built-in
/// strategy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown framework: {name}")]
pub struct UnknownFramework {
    pub name: String,
}

/// Parses `source` with the plain-markup strategy.
pub fn parse(source: &str) -> Vec<Vec<AstNode>> {
    parse_with(source, &plugins::Html)
}

/// Parses `source` with the given strategy.
///
/// Normalizes the text, locates template regions, blanks markup comments in
/// each region, and reads every region into a tree anchored at the region's
/// offset. One tree per located region; offsets are relative to the
/// normalized source.
pub fn parse_with(source: &str, plugin: &dyn ParserPlugin) -> Vec<Vec<AstNode>> {
    let normalized = normalize::normalize(source);
    plugin
        .extract_templates(&normalized)
        .into_iter()
        .map(|extracted| {
            let markup = comments::strip_comments(&extracted.template);
            template::parse_template(&markup, plugin, extracted.offset)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(node: &AstNode) -> &Element {
        match node {
            AstNode::Element(element) => element,
            AstNode::Text(text) => panic!("expected element, got text {:?}", text.raw),
        }
    }

    // =========================================================================
    // Default pipeline
    // =========================================================================

    #[test]
    fn test_parse_defaults_to_plain_markup() {
        let trees = parse("<h1>Hi</h1>");
        assert_eq!(trees.len(), 1);
        assert_eq!(element(&trees[0][0]).tag, "h1");
    }

    #[test]
    fn test_parse_empty_source() {
        assert_eq!(parse(""), Vec::<Vec<AstNode>>::new());
    }

    #[test]
    fn test_comments_blanked_offsets_stable() {
        let source = "<div><!-- note --><b>x</b></div>";
        let trees = parse(source);
        let div = element(&trees[0][0]);
        // the comment leaves no node behind and the sibling keeps its span
        assert_eq!(div.children.len(), 1);
        let b = element(&div.children[0]);
        assert_eq!(b.loc.start, source.find("<b>").unwrap());
        assert_eq!(&source[b.loc.start..b.loc.end], "<b>x</b>");
    }

    #[test]
    fn test_offsets_relative_to_normalized_source() {
        let source = "<div>\r\n<b>x</b>\r\n</div>";
        let normalized = normalize::normalize(source);
        let trees = parse(source);
        let div = element(&trees[0][0]);
        let b = element(&div.children[0]);
        assert_eq!(&normalized[b.loc.start..b.loc.end], "<b>x</b>");
    }

    // =========================================================================
    // Strategy pipelines
    // =========================================================================

    #[test]
    fn test_decorator_pipeline_round_trips() {
        let source = "@Component({\n  template: `\n    <h1 [title]=\"t\">Hi</h1>\n  `\n})\nclass C {}\n";
        let trees = parse_with(source, Framework::Angular.plugin());
        assert_eq!(trees.len(), 1);
        let h1 = element(&trees[0][0]);
        assert_eq!(h1.tag, "h1");
        let normalized = normalize::normalize(source);
        assert_eq!(&normalized[h1.loc.start..h1.loc.end], h1.raw);
        assert_eq!(h1.attributes[0].name, "[title]");
    }

    #[test]
    fn test_tagged_literal_pipeline_round_trips() {
        let source = "const C = () => html`<p id=\"a\">x</p>`;";
        let trees = parse_with(source, Framework::Lit.plugin());
        assert_eq!(trees.len(), 1);
        let p = element(&trees[0][0]);
        assert_eq!(&source[p.loc.start..p.loc.end], p.raw);
    }

    #[test]
    fn test_block_pipeline_uses_block_offset() {
        let source = "<template><div>Hello</div></template>";
        let trees = parse_with(source, Framework::Vue.plugin());
        let div = element(&trees[0][0]);
        assert_eq!(div.loc.start, 10);
        assert_eq!(&source[div.loc.start..div.loc.end], div.raw);
    }

    #[test]
    fn test_inline_markup_pipeline_multiple_regions() {
        let source = "const A = () => <p>1</p>;\nconst B = () => <p>2</p>;\n";
        let trees = parse_with(source, Framework::Jsx.plugin());
        assert_eq!(trees.len(), 2);
        assert_eq!(element(&trees[1][0]).loc.start, source.rfind("<p>").unwrap());
    }

    #[test]
    fn test_every_strategy_handles_empty_input() {
        for framework in [
            Framework::Html,
            Framework::Angular,
            Framework::Jsx,
            Framework::Lit,
            Framework::Svelte,
            Framework::Vue,
        ] {
            assert_eq!(framework.plugin().extract_templates(""), vec![]);
            assert_eq!(framework.plugin().extract_attributes("", 0), vec![]);
            assert_eq!(parse_with("", framework.plugin()), Vec::<Vec<AstNode>>::new());
        }
    }

    #[test]
    fn test_unknown_framework_message() {
        let err = "not-a-framework".parse::<Framework>().unwrap_err();
        assert_eq!(err.name, "not-a-framework");
        assert_eq!(err.to_string(), "Unknown framework: not-a-framework");
    }
}
