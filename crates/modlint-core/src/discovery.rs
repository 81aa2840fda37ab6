//! Module discovery over the two-level category/module layout.

use crate::module::Module;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while discovering modules.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Modules root missing or unreadable.
    #[error("cannot read modules root {}: {source}", .path.display())]
    Root {
        /// The modules root that failed to open.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// No module directories found under the root.
    ///
    /// Fatal: rules that consult "all other module names" are meaningless
    /// against an empty catalog, so the run aborts before any rule executes.
    #[error("no modules found under {}", .path.display())]
    NoModules {
        /// The modules root that was searched.
        path: PathBuf,
    },

    /// Two modules share the same directory name.
    ///
    /// Fatal: peer-header matching in the include-isolation rule is
    /// ambiguous without unique names.
    #[error("duplicate module name `{name}` in categories `{first}` and `{second}`")]
    DuplicateName {
        /// The shared module name.
        name: String,
        /// Category of the first occurrence.
        first: String,
        /// Category of the second occurrence.
        second: String,
    },
}

/// Discovers all modules under `root/<category>/<module>`.
///
/// Walks exactly two directory levels. Entries that are not directories,
/// at either level, are skipped silently. The returned list is sorted by
/// (category, name) so report order does not depend on filesystem
/// listing order.
///
/// # Errors
///
/// Returns [`DiscoveryError::Root`] when the root cannot be read,
/// [`DiscoveryError::NoModules`] when the walk finds nothing, and
/// [`DiscoveryError::DuplicateName`] when two categories contain a
/// module with the same name.
pub fn discover_modules(root: &Path) -> Result<Vec<Module>, DiscoveryError> {
    let categories = std::fs::read_dir(root).map_err(|source| DiscoveryError::Root {
        path: root.to_path_buf(),
        source,
    })?;

    let mut modules = Vec::new();
    for category_entry in categories.flatten() {
        let category_path = category_entry.path();
        if !category_path.is_dir() {
            debug!("Skipping non-directory entry: {}", category_path.display());
            continue;
        }
        let category = category_entry.file_name().to_string_lossy().into_owned();

        let entries = match std::fs::read_dir(&category_path) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Skipping unreadable category {}: {e}", category_path.display());
                continue;
            }
        };

        for module_entry in entries.flatten() {
            let module_path = module_entry.path();
            if !module_path.is_dir() {
                debug!("Skipping non-directory entry: {}", module_path.display());
                continue;
            }
            let name = module_entry.file_name().to_string_lossy().into_owned();
            modules.push(Module::new(name, category.clone(), module_path));
        }
    }

    if modules.is_empty() {
        return Err(DiscoveryError::NoModules {
            path: root.to_path_buf(),
        });
    }

    modules.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.name.cmp(&b.name)));

    let mut seen: HashMap<&str, &str> = HashMap::new();
    for module in &modules {
        if let Some(first) = seen.insert(module.name.as_str(), module.category.as_str()) {
            return Err(DiscoveryError::DuplicateName {
                name: module.name.clone(),
                first: first.to_string(),
                second: module.category.clone(),
            });
        }
    }

    debug!("Discovered {} modules", modules.len());
    Ok(modules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn add_module(root: &Path, category: &str, name: &str) {
        fs::create_dir_all(root.join(category).join(name)).unwrap();
    }

    #[test]
    fn discovers_two_level_layout_sorted() {
        let tmp = TempDir::new().unwrap();
        add_module(tmp.path(), "sensors", "dht22");
        add_module(tmp.path(), "actuators", "relay");
        add_module(tmp.path(), "sensors", "bme280");

        let modules = discover_modules(tmp.path()).unwrap();
        let names: Vec<&str> = modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["relay", "bme280", "dht22"]);
        assert_eq!(modules[0].category, "actuators");
    }

    #[test]
    fn skips_files_at_both_levels() {
        let tmp = TempDir::new().unwrap();
        add_module(tmp.path(), "sensors", "dht22");
        fs::write(tmp.path().join("README.md"), "top-level file").unwrap();
        fs::write(tmp.path().join("sensors").join("notes.txt"), "stray").unwrap();

        let modules = discover_modules(tmp.path()).unwrap();
        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].name, "dht22");
    }

    #[test]
    fn empty_tree_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let err = discover_modules(tmp.path()).unwrap_err();
        assert!(matches!(err, DiscoveryError::NoModules { .. }));
    }

    #[test]
    fn category_without_modules_is_fatal() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("sensors")).unwrap();

        let err = discover_modules(tmp.path()).unwrap_err();
        assert!(matches!(err, DiscoveryError::NoModules { .. }));
    }

    #[test]
    fn missing_root_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let err = discover_modules(&tmp.path().join("nope")).unwrap_err();
        assert!(matches!(err, DiscoveryError::Root { .. }));
    }

    #[test]
    fn duplicate_name_across_categories_is_fatal() {
        let tmp = TempDir::new().unwrap();
        add_module(tmp.path(), "sensors", "dht22");
        add_module(tmp.path(), "actuators", "dht22");

        let err = discover_modules(tmp.path()).unwrap_err();
        match err {
            DiscoveryError::DuplicateName { name, .. } => assert_eq!(name, "dht22"),
            other => panic!("expected DuplicateName, got {other:?}"),
        }
    }
}
