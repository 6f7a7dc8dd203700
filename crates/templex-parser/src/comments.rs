//! Comment neutralization for extracted template regions.

/// Same-length whitespace for `text`: newlines are kept, every other
/// character becomes one space per UTF-8 byte, so byte offsets past the
/// blanked run are unchanged.
pub(crate) fn blank(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == '\n' {
            out.push('\n');
        } else {
            for _ in 0..ch.len_utf8() {
                out.push(' ');
            }
        }
    }
    out
}

/// Blanks every complete `<!-- ... -->` comment with same-length
/// whitespace.
///
/// Blanking instead of deleting keeps every byte offset in the region
/// stable, so node spans computed after stripping still index the text the
/// region was extracted from. Blanked runs are whitespace-only and the tag
/// reader discards them. Matching is non-recursive and non-balancing: each
/// `<!--` closes at the first following `-->`, and an unterminated comment
/// is left untouched.
pub fn strip_comments(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(open) = rest.find("<!--") {
        match rest[open + 4..].find("-->") {
            Some(close) => {
                let end = open + 4 + close + 3;
                out.push_str(&rest[..open]);
                out.push_str(&blank(&rest[open..end]));
                rest = &rest[end..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}
