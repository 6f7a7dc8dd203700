use crate::attr::{AstAttribute, AttrToken, Loc, ScannedValue};

#[inline]
fn is_space(byte: u8) -> bool {
    byte.is_ascii_whitespace()
}

/// Advance past a quoted span. `from` must index the opening quote byte.
///
/// A `\` escapes the following character and both are skipped as a pair.
/// Returns the position just past the closing quote, or the end of the
/// input when the quote is never closed.
pub fn skip_quoted(bytes: &[u8], from: usize) -> usize {
    let quote = bytes[from];
    let mut pos = from + 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            byte if byte == quote => return pos + 1,
            _ => pos += 1,
        }
    }
    pos.min(bytes.len())
}

/// Advance past a brace-balanced span. `from` must index the opening `{`.
///
/// Nested braces adjust a depth counter; quoted substrings are skipped with
/// the quote rule and do not affect depth. Returns the position just past
/// the brace that rebalances the span, or the end of the input when the
/// braces never rebalance.
pub fn skip_braced(bytes: &[u8], from: usize) -> usize {
    let mut pos = from;
    let mut depth: i32 = 0;
    while pos < bytes.len() {
        match bytes[pos] {
            b'"' | b'\'' => pos = skip_quoted(bytes, pos),
            b'{' => {
                depth += 1;
                pos += 1;
            }
            b'}' => {
                depth -= 1;
                pos += 1;
                if depth == 0 {
                    break;
                }
            }
            _ => pos += 1,
        }
    }
    pos
}

/// Reads a single attribute value beginning at `from`.
///
/// A value starting with `"` or `'` runs to the matching unescaped quote;
/// a `${` marker inside it flags the value computed without ending the
/// span. A value starting with `{` is brace-balanced and always computed.
/// Anything else is a bare value running until whitespace, `>`, or `/`.
pub fn read_attribute_value(input: &str, from: usize) -> ScannedValue {
    let bytes = input.as_bytes();

    match bytes.get(from).copied() {
        Some(quote @ (b'"' | b'\'')) => {
            let mut computed = false;
            let mut pos = from + 1;
            while pos < bytes.len() {
                match bytes[pos] {
                    b'\\' => pos += 2,
                    byte if byte == quote => {
                        pos += 1;
                        break;
                    }
                    b'$' if bytes.get(pos + 1) == Some(&b'{') => {
                        computed = true;
                        pos += 1;
                    }
                    _ => pos += 1,
                }
            }
            let end = pos.min(bytes.len());
            ScannedValue {
                value: input[from..end].to_string(),
                end,
                computed,
            }
        }
        Some(b'{') => {
            let end = skip_braced(bytes, from);
            ScannedValue {
                value: input[from..end].to_string(),
                end,
                computed: true,
            }
        }
        _ => {
            let mut pos = from;
            while pos < bytes.len()
                && !is_space(bytes[pos])
                && bytes[pos] != b'>'
                && bytes[pos] != b'/'
            {
                pos += 1;
            }
            let value = &input[from..pos];
            ScannedValue {
                value: value.to_string(),
                end: pos,
                computed: value.contains("${"),
            }
        }
    }
}

/// Splits the raw interior of an opening tag into attribute tokens.
///
/// Walks `raw` left to right, skipping whitespace between tokens. A token's
/// name runs until whitespace, `=`, `>`, or `/`; when `=` follows, the value
/// span is consumed with `read_attribute_value`. Token offsets are absolute
/// (`base_offset` plus the local index).
pub fn split_attributes(raw: &str, base_offset: usize) -> Vec<AttrToken> {
    let bytes = raw.as_bytes();
    let mut out = Vec::new();
    let mut position = 0;

    while position < bytes.len() {
        while position < bytes.len() && is_space(bytes[position]) {
            position += 1;
        }
        if position >= bytes.len() {
            break;
        }
        let seg_start = position;

        while position < bytes.len() {
            let byte = bytes[position];
            if is_space(byte) || byte == b'=' || byte == b'>' || byte == b'/' {
                break;
            }
            position += 1;
        }
        let name_end = position;

        if name_end == seg_start {
            position += 1;
            continue;
        }

        while position < bytes.len() && is_space(bytes[position]) {
            position += 1;
        }

        if position < bytes.len() && bytes[position] == b'=' {
            position += 1;
            while position < bytes.len() && is_space(bytes[position]) {
                position += 1;
            }
            position = read_attribute_value(raw, position).end;
        }

        out.push(AttrToken {
            raw: raw[seg_start..position].to_string(),
            start: base_offset + seg_start,
            end: base_offset + position,
        });
    }

    out
}

/// Interprets a raw attribute token as a structured record.
///
/// The trimmed token text is split at the first `=` (ignoring surrounding
/// whitespace) into name and value. Classification is purely lexical: a
/// value containing a brace or a backtick is computed (which covers `${}`
/// interpolation); nothing is evaluated.
pub fn parse_attribute_token(token: &AttrToken) -> AstAttribute {
    let raw = token.raw.trim();
    let bytes = raw.as_bytes();

    let mut index = 0;
    while index < bytes.len() && !is_space(bytes[index]) && bytes[index] != b'=' {
        index += 1;
    }
    let name = raw[..index].to_string();
    while index < bytes.len() && is_space(bytes[index]) {
        index += 1;
    }

    let mut value = None;
    let mut computed = false;
    if index < bytes.len() && bytes[index] == b'=' {
        index += 1;
        while index < bytes.len() && is_space(bytes[index]) {
            index += 1;
        }
        let text = &raw[index..];
        computed = text.contains('{') || text.contains('`');
        value = Some(text.to_string());
    }

    AstAttribute {
        name,
        value,
        computed,
        raw: raw.to_string(),
        loc: Loc::new(token.start, token.end),
    }
}
