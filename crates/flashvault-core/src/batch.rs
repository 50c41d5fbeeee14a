//! Vault-wide tag migration.
//!
//! # Responsibility
//! - Enumerate documents under a vault root, skipping excluded paths.
//! - Migrate each document independently and tally the outcome.
//!
//! # Invariants
//! - A failure on one document never stops the batch.
//! - Documents are visited in file-name order, so reports are reproducible.
//! - Exclusion markers and tag inference see the vault-relative path only,
//!   so the spelling of the vault root never changes the outcome.

use crate::config::VaultSettings;
use crate::migrate::{migrate_file, Migration, TagChange, WriteMode};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// One document that changed (or would change, in dry-run mode).
#[derive(Debug)]
pub struct MigratedDocument<'a> {
    pub relative_path: &'a Path,
    pub change: &'a TagChange,
}

/// A document or directory entry that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentError {
    pub path: PathBuf,
    pub message: String,
}

/// End-of-run totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    /// Vault-relative paths of migrated documents, in visit order.
    pub migrated: Vec<PathBuf>,
    pub unchanged: usize,
    pub errors: Vec<DocumentError>,
}

impl MigrationReport {
    pub fn migrated_count(&self) -> usize {
        self.migrated.len()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

/// Runs the tag migration over a vault.
pub struct Migrator {
    settings: VaultSettings,
    mode: WriteMode,
}

impl Migrator {
    pub fn new(settings: VaultSettings, mode: WriteMode) -> Self {
        Self { settings, mode }
    }

    pub fn mode(&self) -> WriteMode {
        self.mode
    }

    /// Migrate every document under `root`.
    pub fn run(&self, root: &Path) -> MigrationReport {
        self.run_with(root, |_| {})
    }

    /// Like [`Migrator::run`], calling `on_migrated` as each change lands.
    pub fn run_with<F>(&self, root: &Path, mut on_migrated: F) -> MigrationReport
    where
        F: FnMut(&MigratedDocument<'_>),
    {
        tracing::info!(root = %root.display(), mode = ?self.mode, "Starting tag migration");
        let mut report = MigrationReport::default();

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_excluded(root, entry.path()));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().unwrap_or(root).to_path_buf();
                    tracing::error!(path = %path.display(), error = %e, "Failed to walk vault");
                    report.errors.push(DocumentError {
                        path,
                        message: e.to_string(),
                    });
                    continue;
                }
            };
            if !self.is_document(&entry) {
                continue;
            }

            let path = entry.path();
            let relative_path = path.strip_prefix(root).unwrap_or(path);
            match migrate_file(path, relative_path, self.mode) {
                Ok(Migration::Changed(change)) => {
                    on_migrated(&MigratedDocument {
                        relative_path,
                        change: &change,
                    });
                    report.migrated.push(relative_path.to_path_buf());
                }
                Ok(Migration::Unchanged) => {
                    report.unchanged += 1;
                }
                Err(e) => {
                    tracing::error!(path = %path.display(), error = %e, "Failed to migrate document");
                    report.errors.push(DocumentError {
                        path: path.to_path_buf(),
                        message: e.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            migrated = report.migrated_count(),
            unchanged = report.unchanged,
            errors = report.error_count(),
            "Tag migration finished"
        );
        report
    }

    fn is_document(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == self.settings.extension)
    }

    fn is_excluded(&self, root: &Path, path: &Path) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path).to_string_lossy();
        let relative = relative.replace('\\', "/");
        self.settings
            .exclude
            .iter()
            .any(|marker| relative.contains(marker.as_str()))
    }
}
