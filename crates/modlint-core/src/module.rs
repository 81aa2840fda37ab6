//! Module descriptors and the discovered-name catalog.

use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// A single plugin module discovered in the tree.
///
/// Identity is the directory name, which must be unique across all
/// categories. The layout below `path` follows the scaffolded convention:
/// build descriptor, metadata descriptor, README, `include/<name>.h`,
/// and sources under `src/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Module {
    /// Directory name of the module.
    pub name: String,
    /// Category directory the module lives under.
    pub category: String,
    /// Root of the module's file tree.
    pub path: PathBuf,
}

impl Module {
    /// Creates a new module descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, category: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            path: path.into(),
        }
    }

    /// Path of the module's public header, `include/<name>.h`.
    #[must_use]
    pub fn public_header(&self) -> PathBuf {
        self.path.join("include").join(format!("{}.h", self.name))
    }

    /// Path of the module's source directory.
    #[must_use]
    pub fn src_dir(&self) -> PathBuf {
        self.path.join("src")
    }
}

/// The full set of module names discovered in one run.
///
/// The include-isolation rule uses the catalog to decide whether an
/// include target is another module's public header. Name uniqueness is
/// enforced at discovery time, so lookups here are unambiguous.
#[derive(Debug, Clone, Default)]
pub struct ModuleCatalog {
    names: BTreeSet<String>,
}

impl ModuleCatalog {
    /// Builds the catalog from a discovered module list.
    #[must_use]
    pub fn from_modules(modules: &[Module]) -> Self {
        Self {
            names: modules.iter().map(|m| m.name.clone()).collect(),
        }
    }

    /// Returns true if a module with this name was discovered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Returns the peer module name when `target` is exactly another
    /// module's public header (`<peer>.h`), excluding `current` itself.
    #[must_use]
    pub fn peer_for_header(&self, target: &str, current: &str) -> Option<&str> {
        let stem = target.strip_suffix(".h")?;
        if stem == current {
            return None;
        }
        self.names.get(stem).map(String::as_str)
    }

    /// Number of cataloged modules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no modules were cataloged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
