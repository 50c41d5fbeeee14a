//! Per-document tag migration.
//!
//! # Responsibility
//! - Compute the new tag set from the old tags and the document path.
//! - Rewrite the document text and report whether anything changed.
//! - Read and write one document on disk.
//!
//! # Invariants
//! - The new tag set is computed before any text is touched.
//! - A document is written at most once, and only when its content changed.
//! - Documents without flashcard tags are never rewritten.

use crate::context::DocumentContext;
use crate::rewrite::rewrite_document;
use crate::tags::{extract_tags, normalize_unknown};
use crate::vocabulary::{legacy_policy, TagPolicy, JOB_INTERVIEW, JOB_QUESTIONS};
use similar::TextDiff;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MigrateError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("cannot build removal pattern for {}: {source}", path.display())]
    Pattern { path: PathBuf, source: regex::Error },
}

/// Whether a changed document is written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Apply,
    DryRun,
}

/// Result of migrating one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Migration {
    Unchanged,
    Changed(TagChange),
}

impl Migration {
    pub fn is_changed(&self) -> bool {
        matches!(self, Migration::Changed(_))
    }
}

/// A rewrite that differs from the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChange {
    pub original: String,
    pub content: String,
    /// Tag occurrences found in the original, in document order.
    pub old_tags: Vec<String>,
    pub new_tags: BTreeSet<String>,
}

impl TagChange {
    /// Unified diff of the rewrite, labelled with `name`.
    pub fn unified_diff(&self, name: &str) -> String {
        TextDiff::from_lines(self.original.as_str(), self.content.as_str())
            .unified_diff()
            .context_radius(2)
            .header(name, name)
            .to_string()
    }
}

/// New tag set for a document, lexicographically ordered.
pub fn plan_tags(old_tags: &[&str], context: &DocumentContext) -> BTreeSet<String> {
    let mut new_tags = BTreeSet::new();
    let mut had_job_questions = false;

    for &tag in old_tags {
        if tag == JOB_QUESTIONS {
            had_job_questions = true;
            if let Some(topic) = context.infer(tag) {
                new_tags.insert(topic.to_string());
            }
            continue;
        }

        match legacy_policy(tag) {
            Some(TagPolicy::Drop) => {}
            Some(TagPolicy::KeepAs(replacement)) => {
                new_tags.insert(replacement.to_string());
            }
            Some(TagPolicy::ResolveFromContext) => {
                if let Some(resolved) = context.infer(tag) {
                    new_tags.insert(resolved.to_string());
                }
            }
            None => {
                new_tags.insert(normalize_unknown(tag));
            }
        }
    }

    if had_job_questions {
        new_tags.insert(JOB_INTERVIEW.to_string());
    }
    if let Some(source) = context.source_tag() {
        new_tags.insert(source.to_string());
    }

    new_tags
}

/// Migrate document text stored at `path`. Pure; no I/O.
pub fn migrate_text(text: &str, path: &Path) -> Result<Migration, regex::Error> {
    let old_tags = extract_tags(text);
    if old_tags.is_empty() {
        return Ok(Migration::Unchanged);
    }

    let context = DocumentContext::from_path(path);
    let new_tags = plan_tags(&old_tags, &context);
    let content = rewrite_document(text, &old_tags, &new_tags)?;

    if content == text {
        return Ok(Migration::Unchanged);
    }

    Ok(Migration::Changed(TagChange {
        original: text.to_string(),
        content,
        old_tags: old_tags.into_iter().map(str::to_string).collect(),
        new_tags,
    }))
}

/// Migrate one file in place.
///
/// `vault_path` is where the document sits inside the vault; inference and
/// provenance tags are derived from it rather than from `path`.
///
/// # Errors
/// - [`MigrateError::Read`] when the file is unreadable or not UTF-8.
/// - [`MigrateError::Write`] when writing back fails; the file keeps its
///   previous content since the write is whole-file.
pub fn migrate_file(
    path: &Path,
    vault_path: &Path,
    mode: WriteMode,
) -> Result<Migration, MigrateError> {
    let text = fs::read_to_string(path).map_err(|source| MigrateError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let migration = migrate_text(&text, vault_path).map_err(|source| MigrateError::Pattern {
        path: path.to_path_buf(),
        source,
    })?;

    if let (Migration::Changed(change), WriteMode::Apply) = (&migration, mode) {
        fs::write(path, &change.content).map_err(|source| MigrateError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            old = change.old_tags.len(),
            new = change.new_tags.len(),
            "Document rewritten"
        );
    }

    Ok(migration)
}
