//! Path-based inference for ambiguous legacy tags and provenance tags.
//!
//! # Invariants
//! - Keyword checks on the path and file name are case-insensitive.
//! - Folder checks for provenance are case-sensitive, except the
//!   yandex/algorithm pair.
//! - Path separators are normalized to `/` before matching.
//! - The path is the document's location inside the vault; callers strip
//!   the vault root first.

use crate::vocabulary::{
    source_folders, ALGORITHMS, DATA_SCIENCE, DATA_STRUCTURES, JOB_QUESTIONS, KOTENKOV_SOURCE, ML,
    OOP, PYTHON, STATISTICS, YANDEX_ALGORITHMS_SOURCE,
};
use std::path::Path;

/// Path signals for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentContext {
    path: String,
    path_lower: String,
    file_name_lower: String,
}

impl DocumentContext {
    pub fn from_path(path: &Path) -> Self {
        let path_text = path.to_string_lossy();
        let path = if std::path::MAIN_SEPARATOR == '/' {
            path_text.into_owned()
        } else {
            path_text.replace(std::path::MAIN_SEPARATOR, "/")
        };
        let file_name = path.rsplit('/').next().unwrap_or_default();

        Self {
            path_lower: path.to_lowercase(),
            file_name_lower: file_name.to_lowercase(),
            path,
        }
    }

    /// Resolves a legacy tag marked `ResolveFromContext`.
    ///
    /// Returns `None` when the tag should be dropped.
    pub fn infer(&self, legacy_tag: &str) -> Option<&'static str> {
        match legacy_tag {
            DATA_SCIENCE => self.infer_data_science(),
            PYTHON => Some(self.infer_python()),
            JOB_QUESTIONS => Some(self.infer_job_topic()),
            _ => None,
        }
    }

    /// Provenance tag derived from where the document is stored.
    pub fn source_tag(&self) -> Option<&'static str> {
        if self.path.contains("Котенков") {
            return Some(KOTENKOV_SOURCE);
        }
        if self.path_lower.contains("yandex") && self.path_lower.contains("algorithm") {
            return Some(YANDEX_ALGORITHMS_SOURCE);
        }
        source_folders()
            .iter()
            .find(|(folder, _)| self.path.contains(folder))
            .map(|(_, tag)| *tag)
    }

    fn infer_data_science(&self) -> Option<&'static str> {
        if self.path_has_any(&["probability", "statistics"]) {
            Some(STATISTICS)
        } else if self.path_has_any(&["ml", "machine learning"]) {
            Some(ML)
        } else {
            None
        }
    }

    fn infer_python(&self) -> &'static str {
        if self.name_has_any(&["list", "hashmap", "dict", "set"]) {
            DATA_STRUCTURES
        } else {
            PYTHON
        }
    }

    fn infer_job_topic(&self) -> &'static str {
        if self.name_has_any(&["list", "hashmap", "dict"]) {
            DATA_STRUCTURES
        } else if self.name_has_any(&["python"]) {
            PYTHON
        } else if self.name_has_any(&["algorithm"]) {
            ALGORITHMS
        } else if self.name_has_any(&["oop", "class"]) {
            OOP
        } else {
            PYTHON
        }
    }

    fn path_has_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|needle| self.path_lower.contains(needle))
    }

    fn name_has_any(&self, needles: &[&str]) -> bool {
        needles
            .iter()
            .any(|needle| self.file_name_lower.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(path: &str) -> DocumentContext {
        DocumentContext::from_path(Path::new(path))
    }

    #[test]
    fn data_science_follows_path_topic() {
        assert_eq!(
            ctx("vault/Probability/bayes.md").infer(DATA_SCIENCE),
            Some(STATISTICS)
        );
        assert_eq!(
            ctx("vault/Machine Learning/trees.md").infer(DATA_SCIENCE),
            Some(ML)
        );
        assert_eq!(ctx("vault/misc/notes.md").infer(DATA_SCIENCE), None);
    }

    #[test]
    fn python_with_data_structure_file_name() {
        assert_eq!(ctx("vault/notes/HashMap internals.md").infer(PYTHON), Some(DATA_STRUCTURES));
        assert_eq!(ctx("vault/notes/generators.md").infer(PYTHON), Some(PYTHON));
    }

    #[test]
    fn python_keywords_only_look_at_file_name() {
        assert_eq!(ctx("vault/lists/generators.md").infer(PYTHON), Some(PYTHON));
    }

    #[test]
    fn job_questions_keyword_priority() {
        assert_eq!(ctx("jobs/dict vs list.md").infer(JOB_QUESTIONS), Some(DATA_STRUCTURES));
        assert_eq!(ctx("jobs/python algorithm.md").infer(JOB_QUESTIONS), Some(PYTHON));
        assert_eq!(ctx("jobs/Algorithm basics.md").infer(JOB_QUESTIONS), Some(ALGORITHMS));
        assert_eq!(ctx("jobs/Class methods.md").infer(JOB_QUESTIONS), Some(OOP));
        assert_eq!(ctx("jobs/misc.md").infer(JOB_QUESTIONS), Some(PYTHON));
    }

    #[test]
    fn set_is_a_data_structure_only_for_python_tag() {
        assert_eq!(ctx("jobs/set ops.md").infer(JOB_QUESTIONS), Some(PYTHON));
        assert_eq!(ctx("jobs/set ops.md").infer(PYTHON), Some(DATA_STRUCTURES));
    }

    #[test]
    fn other_tags_have_no_inference() {
        assert_eq!(ctx("vault/list.md").infer("#🃏/rust"), None);
    }

    #[test]
    fn source_tag_priorities() {
        assert_eq!(
            ctx("NLP/[Котенков] Attention.md").source_tag(),
            Some(KOTENKOV_SOURCE)
        );
        assert_eq!(
            ctx("Courses/Yandex/Algorithms/sorting.md").source_tag(),
            Some(YANDEX_ALGORITHMS_SOURCE)
        );
        assert_eq!(
            ctx("Programming/OOP Basics/inheritance.md").source_tag(),
            Some("#🃏/source/oop-basics-course")
        );
        assert_eq!(ctx("Programming/oop basics/x.md").source_tag(), None);
        assert_eq!(ctx("Daily/2024-01-01.md").source_tag(), None);
    }
}
