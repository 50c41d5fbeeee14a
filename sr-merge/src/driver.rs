//! File-level driver: read the three revisions git hands us, resolve, and
//! write the result over the local revision.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::resolver::Resolver;
use crate::types::{MergeScenario, Resolution};

/// Paths passed by git as `%O %A %B`.
#[derive(Debug, Clone)]
pub struct DriverPaths {
    pub ancestor: PathBuf,
    /// Also the output: git reads the merge result back from here.
    pub current: PathBuf,
    pub other: PathBuf,
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Resolve one conflicted file in place.
///
/// # Errors
/// Returns [`DriverError::Read`] when any revision cannot be read and
/// [`DriverError::Write`] when the result cannot be written back. Nothing is
/// written unless all three reads succeed.
pub fn run_driver(paths: &DriverPaths) -> Result<Resolution, DriverError> {
    let base = read(&paths.ancestor)?;
    let current = read(&paths.current)?;
    let other = read(&paths.other)?;

    let resolution = Resolver::new().resolve(&MergeScenario::new(
        base.as_str(),
        current.as_str(),
        other.as_str(),
    ));

    fs::write(&paths.current, &resolution.content).map_err(|source| DriverError::Write {
        path: paths.current.clone(),
        source,
    })?;

    if resolution.discarded_lines > 0 {
        tracing::warn!(
            path = %paths.current.display(),
            discarded_lines = resolution.discarded_lines,
            "Incoming content differs; local edits replaced by the incoming revision"
        );
    } else {
        tracing::debug!(
            path = %paths.current.display(),
            strategy = %resolution.strategy,
            "Merge resolved"
        );
    }

    Ok(resolution)
}

fn read(path: &Path) -> Result<String, DriverError> {
    fs::read_to_string(path).map_err(|source| DriverError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Lines a user needs to register the driver with git under `name`.
pub fn gitconfig_snippet(name: &str, program: &str) -> String {
    format!(
        r#"# .gitattributes
*.md merge={name}

# register the driver (run once per clone)
git config merge.{name}.name "spaced-repetition aware merge"
git config merge.{name}.driver "{program} %O %A %B"
"#
    )
}
