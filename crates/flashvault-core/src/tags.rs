//! Flashcard tag scanning.
//!
//! A tag is the prefix `#🃏/` followed by any run of non-whitespace
//! characters. Matching is line-local; there is no markdown parsing.

use once_cell::sync::Lazy;
use regex::Regex;

static FLASHCARD_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#🃏/\S+").expect("valid flashcard tag regex"));

/// All tag occurrences in document order, duplicates included.
pub fn extract_tags(text: &str) -> Vec<&str> {
    FLASHCARD_TAG_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .collect()
}

/// Byte offset where the first tag-shaped token starts.
pub fn first_tag_offset(text: &str) -> Option<usize> {
    FLASHCARD_TAG_RE.find(text).map(|m| m.start())
}

/// Spelling fix applied to tags that are not part of the legacy vocabulary.
pub fn normalize_unknown(tag: &str) -> String {
    if tag.contains('_') {
        tag.replace('_', "-")
    } else {
        tag.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_in_order_with_duplicates() {
        let text = "#🃏/python #🃏/ml\nbody #🃏/python\n";
        assert_eq!(
            extract_tags(text),
            vec!["#🃏/python", "#🃏/ml", "#🃏/python"]
        );
    }

    #[test]
    fn tag_ends_at_whitespace_only() {
        assert_eq!(extract_tags("see #🃏/a/b_c, then"), vec!["#🃏/a/b_c,"]);
        assert!(extract_tags("#tag #🃏 plain").is_empty());
    }

    #[test]
    fn first_offset_is_a_byte_index() {
        let text = "é #🃏/x";
        let offset = first_tag_offset(text).expect("tag present");
        assert_eq!(&text[offset..], "#🃏/x");
    }

    #[test]
    fn normalize_unknown_replaces_underscores() {
        assert_eq!(normalize_unknown("#🃏/foo_bar"), "#🃏/foo-bar");
        assert_eq!(normalize_unknown("#🃏/a/b_c_d"), "#🃏/a/b-c-d");
        assert_eq!(normalize_unknown("#🃏/rust"), "#🃏/rust");
    }
}
