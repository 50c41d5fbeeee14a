use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Optional settings file; every field falls back to a default.
///
/// The tag vocabulary is not configurable here, see [`crate::vocabulary`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub vault: VaultSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultSettings {
    /// Document extension, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Documents whose vault-relative path contains any of these are skipped.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for VaultSettings {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            exclude: default_exclude(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Also write logs to `<dir>/flashvault.log`.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            dir: None,
        }
    }
}

fn default_extension() -> String {
    "md".into()
}
fn default_exclude() -> Vec<String> {
    vec!["templates".into(), "home".into(), "📁 files".into()]
}
fn default_filter() -> String {
    "info".into()
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Like [`Settings::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
