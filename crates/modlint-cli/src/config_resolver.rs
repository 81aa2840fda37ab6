//! Configuration file resolution.
//!
//! A check looks for its configuration in a fixed priority order: the
//! `--config` flag wins outright, then `modlint.toml` / `.modlint.toml`
//! in the checked project, then a per-user fallback at
//! `~/.modlint/config.toml`. When none exist the built-in defaults
//! apply.

use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order.
const PROJECT_CONFIG_NAMES: &[&str] = &["modlint.toml", ".modlint.toml"];

/// Config file name within the global config directory.
const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config`; trusted as-is, the caller
    /// reports a missing file as an error.
    Explicit(PathBuf),
    /// Found next to the checked project.
    Project(PathBuf),
    /// Loaded from the per-user config directory.
    Global(PathBuf),
    /// Nothing found; built-in defaults apply.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Returns `true` if the config came from the per-user directory.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

/// Resolves the configuration file for a check of `project_dir`.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_with_global(project_dir, explicit, global_config_dir())
}

/// Testable core: the global directory is injected so tests never touch
/// the real home directory or environment.
fn resolve_with_global(
    project_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    let project_candidates = PROJECT_CONFIG_NAMES
        .iter()
        .map(|name| project_dir.join(name));
    for candidate in project_candidates {
        if candidate.exists() {
            tracing::debug!("Found project config: {}", candidate.display());
            return ConfigSource::Project(candidate);
        }
    }

    match global_dir.map(|dir| dir.join(GLOBAL_CONFIG_NAME)) {
        Some(candidate) if candidate.exists() => {
            tracing::debug!("Found global config: {}", candidate.display());
            ConfigSource::Global(candidate)
        }
        _ => ConfigSource::Default,
    }
}

/// Per-user config directory: `$MODLINT_CONFIG_DIR` when set (CI and
/// test setups), otherwise `~/.modlint/`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    std::env::var("MODLINT_CONFIG_DIR")
        .map(PathBuf::from)
        .ok()
        .or_else(|| home::home_dir().map(|h| h.join(".modlint")))
}
