//! Source normalization applied before template location.

use regex::Regex;
use std::sync::LazyLock;

static LINE_ENDINGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n?|\x{2028}|\x{2029}").unwrap());

static EXOTIC_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\t\x0B\x0C\x{A0}\x{1680}\x{2000}-\x{200A}\x{202F}\x{205F}\x{3000}]+").unwrap()
});

/// Normalizes a raw source string: strips a leading BOM, unifies line
/// endings (`\r\n`, `\r`, U+2028, U+2029) to `\n`, and collapses each run
/// of exotic whitespace to a single space.
///
/// Every offset reported by the pipeline is relative to the normalized
/// text, not the raw file bytes.
pub fn normalize(source: &str) -> String {
    let source = source.strip_prefix('\u{FEFF}').unwrap_or(source);
    let unified = LINE_ENDINGS.replace_all(source, "\n");
    EXOTIC_WHITESPACE.replace_all(&unified, " ").into_owned()
}
