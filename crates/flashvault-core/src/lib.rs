//! Flashcard tag migration for a markdown vault.
//!
//! Legacy `#🃏/...` tags are rewritten to the semantic vocabulary using the
//! static tables in [`vocabulary`] plus path-based inference in [`context`].

pub mod batch;
pub mod config;
pub mod context;
pub mod logging;
pub mod migrate;
pub mod rewrite;
pub mod tags;
pub mod vocabulary;

pub use batch::{DocumentError, MigratedDocument, MigrationReport, Migrator};
pub use config::Settings;
pub use context::DocumentContext;
pub use migrate::{
    migrate_file, migrate_text, plan_tags, MigrateError, Migration, TagChange, WriteMode,
};
pub use tags::extract_tags;
pub use vocabulary::TagPolicy;
