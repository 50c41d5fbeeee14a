//! Two-pass tag replacement on document text.
//!
//! Pass one removes every old tag occurrence from the original text. Pass two
//! locates the insertion point in the intermediate text and splices the new
//! tag line in. Neither pass shares a cursor with the other.

use crate::tags::first_tag_offset;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};

static BLANK_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("valid blank line regex"));

/// Replace `old_tags` with `new_tags` and tidy blank lines.
///
/// With an empty `new_tags` the old tags are removed and no tag line is
/// inserted.
///
/// # Errors
/// Returns an error only if a removal pattern exceeds the regex size limit.
pub fn rewrite_document(
    text: &str,
    old_tags: &[&str],
    new_tags: &BTreeSet<String>,
) -> Result<String, regex::Error> {
    let stripped = remove_tags(text, old_tags)?;
    let content = if new_tags.is_empty() {
        stripped
    } else {
        insert_tag_line(&stripped, new_tags)
    };

    Ok(collapse_blank_lines(&content))
}

/// Remove each occurrence bounded by line start or whitespace.
///
/// The whitespace after a tag is consumed with it, so occurrences separated
/// by a single space need one pass each; `old_tags` carries duplicates for
/// exactly that reason.
pub fn remove_tags(text: &str, old_tags: &[&str]) -> Result<String, regex::Error> {
    let mut patterns: HashMap<&str, Regex> = HashMap::new();
    let mut content = text.to_string();

    for &tag in old_tags {
        let re = match patterns.entry(tag) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let pattern = format!(r"(?m)(^|\s+){}(\s|$)", regex::escape(tag));
                entry.insert(Regex::new(&pattern)?)
            }
        };
        content = re.replace_all(&content, "${1}").into_owned();
    }

    Ok(content)
}

/// Splice the tag line where the first remaining tag starts, or prepend it
/// as its own paragraph.
pub fn insert_tag_line(text: &str, new_tags: &BTreeSet<String>) -> String {
    let line = new_tags
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");

    match first_tag_offset(text) {
        Some(offset) => format!("{}{}\n{}", &text[..offset], line, &text[offset..]),
        None => format!("{line}\n\n{text}"),
    }
}

pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_RUN_RE.replace_all(text, "\n\n").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tags: &[&str]) -> BTreeSet<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn removes_tag_line_and_prepends_sorted_tags() {
        let text = "#🃏/python #🃏/job_questions\n\nWhat is a list?\n";
        let out = rewrite_document(
            text,
            &["#🃏/python", "#🃏/job_questions"],
            &set(&["#🃏/python", "#🃏/job-interview"]),
        )
        .unwrap();
        assert_eq!(out, "#🃏/job-interview #🃏/python\n\nWhat is a list?\n");
    }

    #[test]
    fn duplicates_separated_by_one_space_are_all_removed() {
        let out = remove_tags("#🃏/a #🃏/a #🃏/a\n", &["#🃏/a", "#🃏/a", "#🃏/a"]).unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn tag_prefix_of_a_longer_tag_is_not_removed() {
        let out = remove_tags("#🃏/ml/nlp\n", &["#🃏/ml"]).unwrap();
        assert_eq!(out, "#🃏/ml/nlp\n");
    }

    #[test]
    fn glued_tag_survives_removal_and_marks_insertion_point() {
        let text = "intro\nword#🃏/x\n";
        let stripped = remove_tags(text, &["#🃏/x"]).unwrap();
        assert_eq!(stripped, text);
        assert_eq!(
            insert_tag_line(&stripped, &set(&["#🃏/y"])),
            "intro\nword#🃏/y\n#🃏/x\n"
        );
    }

    #[test]
    fn collapses_four_newlines_to_two() {
        assert_eq!(collapse_blank_lines("a\n\n\n\nb\n\n\nc\n\nd"), "a\n\nb\n\nc\n\nd");
    }

    #[test]
    fn empty_new_tags_remove_without_inserting() {
        let text = "Q\n#🃏/tracing-agents\n\n\n\nA";
        let out = rewrite_document(text, &["#🃏/tracing-agents"], &BTreeSet::new()).unwrap();
        assert_eq!(out, "Q\n\nA");
    }

    #[test]
    fn regex_metacharacters_in_tags_are_escaped() {
        let out = remove_tags("x #🃏/c++ y #🃏/cxx\n", &["#🃏/c++"]).unwrap();
        assert_eq!(out, "x y #🃏/cxx\n");
    }
}
