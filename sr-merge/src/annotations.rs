//! Spaced-repetition scheduling comments.
//!
//! Review plugins append an HTML comment such as `<!--SR:!2024-03-01,4,270-->`
//! after each card. The payload is opaque to us: anything up to the first `>`.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static SR_ANNOTATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<!--SR:![^>]+-->").expect("valid SR annotation regex"));

/// Remove every scheduling comment from `text`.
///
/// Borrows the input untouched when it contains no annotation.
pub fn strip_annotations(text: &str) -> Cow<'_, str> {
    SR_ANNOTATION_RE.replace_all(text, "")
}

/// True when `a` and `b` differ at most in their scheduling comments.
pub fn annotation_insensitive_eq(a: &str, b: &str) -> bool {
    strip_annotations(a) == strip_annotations(b)
}
