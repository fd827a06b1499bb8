//! Term, phrase, field and required-term primitives.

use crate::escape::{Escaper, escape_special_characters};

/// Quote `text` as a term after escaping its reserved characters.
///
/// A single word and a multi-word phrase are treated the same way: the
/// result is always wrapped in double quotes.
pub fn terms(text: &str) -> String {
    quote(&escape_special_characters(text))
}

/// Alias of [`terms`].
pub fn term(text: &str) -> String {
    terms(text)
}

/// Alias of [`terms`].
pub fn phrase(text: &str) -> String {
    terms(text)
}

/// Like [`terms`] but escaping with a caller-supplied [`Escaper`].
pub fn terms_with(escaper: &dyn Escaper, text: &str) -> String {
    quote(&escaper.escape(text))
}

/// Scope a fragment to a field: `<name>: <fragment>`.
///
/// Neither the name nor the fragment is escaped.
pub fn field(name: &str, fragment: &str) -> String {
    format!("{}: {}", name, fragment)
}

/// Mark a fragment as required: `+<fragment>`.
pub fn required(fragment: &str) -> String {
    format!("+{}", fragment)
}

fn quote(escaped: &str) -> String {
    format!("\"{}\"", escaped)
}
