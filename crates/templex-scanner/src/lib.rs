//! Templex attribute scanner
//!
//! Splits the raw interior of a markup opening tag into attribute tokens and
//! interprets each token as a structured attribute record. The scanner
//! balances quoted strings and braced expressions so structural characters
//! inside a value (`>`, `/`, whitespace) never end a token early.
//!
//! Every function here is total: malformed or truncated input produces a
//! span that runs to the end of the text, never an error.
//!
//! # Example
//!
//! ```
//! use templex_scanner::split_attributes;
//!
//! let tokens = split_attributes(r#"class="box" disabled"#, 0);
//! assert_eq!(tokens.len(), 2);
//! ```

pub mod attr;
pub mod scanner;

pub use attr::{AstAttribute, AttrToken, Loc, ScannedValue};
pub use scanner::{
    parse_attribute_token, read_attribute_value, skip_braced, skip_quoted, split_attributes,
};
