use serde::Serialize;

/// A half-open byte range into the normalized source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Loc {
    pub start: usize,
    pub end: usize,
}

impl Loc {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// One raw attribute token produced by `split_attributes`.
///
/// `start`/`end` are absolute offsets (the splitter's base offset plus the
/// local index). The span includes any whitespace consumed while probing
/// for `=` after the name, so `raw` may carry trailing whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrToken {
    pub raw: String,
    pub start: usize,
    pub end: usize,
}

/// A value span consumed by `read_attribute_value`.
///
/// `end` is the index just past the span. `computed` is set when the value
/// syntax indicates a non-literal binding: a brace-delimited expression, or
/// an interpolation marker inside a quoted or bare value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedValue {
    pub value: String,
    pub end: usize,
    pub computed: bool,
}

/// A structured attribute record.
///
/// `value` is `None` for boolean/valueless attributes and otherwise keeps
/// the delimiters (`"foo"`, `{expr}`) exactly as written. `raw` is the
/// trimmed token text; `loc` spans the whole untrimmed token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AstAttribute {
    pub name: String,
    pub value: Option<String>,
    pub computed: bool,
    pub raw: String,
    pub loc: Loc,
}
