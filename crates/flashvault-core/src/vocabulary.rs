//! Static flashcard tag vocabulary.
//!
//! # Responsibility
//! - Map every legacy tag to exactly one [`TagPolicy`].
//! - Map storage folders to provenance ("source") tags.
//!
//! # Invariants
//! - Tables are built once per process and never mutated.
//! - The deletion set is exactly the legacy tags whose policy is [`TagPolicy::Drop`].
//! - Folder rules are evaluated in declaration order; the first hit wins.

use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashMap};

/// Prefix shared by every flashcard tag.
pub const TAG_PREFIX: &str = "#🃏/";

pub const DATA_SCIENCE: &str = "#🃏/data-science";
pub const PYTHON: &str = "#🃏/python";
pub const JOB_QUESTIONS: &str = "#🃏/job_questions";
pub const JOB_INTERVIEW: &str = "#🃏/job-interview";

pub const STATISTICS: &str = "#🃏/math/statistics";
pub const ML: &str = "#🃏/ml";
pub const DATA_STRUCTURES: &str = "#🃏/data-structures";
pub const ALGORITHMS: &str = "#🃏/algorithms";
pub const OOP: &str = "#🃏/oop";

pub const KOTENKOV_SOURCE: &str = "#🃏/source/kotenkov-nlp-course";
pub const YANDEX_ALGORITHMS_SOURCE: &str = "#🃏/yandex-algorithms-course";

/// What happens to a legacy tag during migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagPolicy {
    /// Removed without replacement.
    Drop,
    /// Replaced by a fixed tag.
    KeepAs(&'static str),
    /// Replaced by a tag inferred from the document path, or dropped when
    /// inference finds nothing.
    ResolveFromContext,
}

static LEGACY_TAGS: Lazy<HashMap<&'static str, TagPolicy>> = Lazy::new(|| {
    use TagPolicy::{Drop, KeepAs, ResolveFromContext};
    HashMap::from([
        (DATA_SCIENCE, ResolveFromContext),
        ("#🃏/probability-theory", KeepAs("#🃏/math/probability-theory")),
        ("#🃏/statistics", KeepAs(STATISTICS)),
        (JOB_QUESTIONS, ResolveFromContext),
        ("#🃏/design_patterns", KeepAs("#🃏/design-patterns")),
        ("#🃏/code_smells", KeepAs("#🃏/code-smells")),
        ("#🃏/pandas-basics", KeepAs("#🃏/pandas")),
        ("#🃏/ml-basics", KeepAs(ML)),
        ("#🃏/oop-basics", KeepAs(OOP)),
        ("#🃏/backend-basics", KeepAs("#🃏/backend")),
        (PYTHON, ResolveFromContext),
        ("#🃏/programming/python", KeepAs(PYTHON)),
        (ALGORITHMS, KeepAs(ALGORITHMS)),
        ("#🃏/recsys", KeepAs("#🃏/ml/recsys")),
        ("#🃏/nlp", KeepAs("#🃏/ml/nlp")),
        ("#🃏/gradient-descent", KeepAs("#🃏/math")),
        ("#🃏/tracing-agents", Drop),
        ("#🃏/evaluation-agents", Drop),
    ])
});

static DELETED_TAGS: Lazy<BTreeSet<&'static str>> = Lazy::new(|| {
    LEGACY_TAGS
        .iter()
        .filter(|(_, policy)| **policy == TagPolicy::Drop)
        .map(|(tag, _)| *tag)
        .collect()
});

/// Folder substring -> provenance tag, checked in order.
const SOURCE_FOLDERS: &[(&str, &str)] = &[
    ("Programming/Python Basics", "#🃏/source/python-basics-course"),
    ("Programming/OOP Basics", "#🃏/source/oop-basics-course"),
    ("Programming/Backend Basics", "#🃏/source/backend-basics-course"),
    ("Programming/Pandas Basics", "#🃏/source/pandas-basics-course"),
    ("Programming/Machine Learning", "#🃏/source/ml-basics-course"),
    ("Programming/Design Patterns", "#🃏/source/refactoring-guru/design-patterns"),
    ("Programming/Code smells", "#🃏/source/refactoring-guru/code-smells"),
    ("Теория вероятностей", "#🃏/probability-theory-course"),
    ("RecSys", "#🃏/recsys-course"),
    ("Programming/LangGraph", "#🃏/langgraph-course"),
];

/// Policy for a legacy tag; `None` means the tag is not legacy and is kept.
pub fn legacy_policy(tag: &str) -> Option<TagPolicy> {
    LEGACY_TAGS.get(tag).copied()
}

/// Tags removed unconditionally, in lexicographic order.
pub fn deletion_set() -> &'static BTreeSet<&'static str> {
    &DELETED_TAGS
}

/// Ordered folder rules used for provenance tagging.
pub fn source_folders() -> &'static [(&'static str, &'static str)] {
    SOURCE_FOLDERS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deletion_set_matches_drop_policies() {
        let deleted: Vec<_> = deletion_set().iter().copied().collect();
        assert_eq!(deleted, vec!["#🃏/evaluation-agents", "#🃏/tracing-agents"]);
        assert!(!deletion_set().contains(PYTHON));
    }

    #[test]
    fn legacy_policy_covers_the_three_cases() {
        assert_eq!(legacy_policy("#🃏/nlp"), Some(TagPolicy::KeepAs("#🃏/ml/nlp")));
        assert_eq!(legacy_policy(DATA_SCIENCE), Some(TagPolicy::ResolveFromContext));
        assert_eq!(legacy_policy("#🃏/evaluation-agents"), Some(TagPolicy::Drop));
        assert_eq!(legacy_policy("#🃏/rust"), None);
    }

    #[test]
    fn replacements_stay_inside_the_flashcard_namespace() {
        for (tag, policy) in LEGACY_TAGS.iter() {
            assert!(tag.starts_with(TAG_PREFIX));
            if let TagPolicy::KeepAs(target) = policy {
                assert!(target.starts_with(TAG_PREFIX), "{tag} -> {target}");
            }
        }
        for (_, source) in source_folders() {
            assert!(source.starts_with(TAG_PREFIX));
        }
    }
}
