//! Context types for rule execution.

use crate::module::{Module, ModuleCatalog};
use std::path::{Path, PathBuf};

/// Context provided to module rules.
///
/// Bundles the module under check with the catalog of every discovered
/// module name and the root the check was started from, plus the file
/// enumeration helpers the rules share.
#[derive(Debug, Clone)]
pub struct ModuleContext<'a> {
    /// The module under check.
    pub module: &'a Module,
    /// Names of every module discovered in this run.
    pub catalog: &'a ModuleCatalog,
    /// Root directory the check was started from.
    pub root: &'a Path,
}

impl<'a> ModuleContext<'a> {
    /// Creates a new module context.
    #[must_use]
    pub fn new(module: &'a Module, catalog: &'a ModuleCatalog, root: &'a Path) -> Self {
        Self {
            module,
            catalog,
            root,
        }
    }

    /// Lists the module's C source files (`src/*.c`), sorted.
    ///
    /// An absent `src/` directory yields an empty list.
    #[must_use]
    pub fn source_files(&self) -> Vec<PathBuf> {
        let pattern = format!("{}/*.c", self.module.src_dir().display());
        let mut files: Vec<PathBuf> = glob::glob(&pattern)
            .map(|paths| paths.flatten().collect())
            .unwrap_or_default();
        files.sort();
        files
    }

    /// Lists every `.c` and `.h` file anywhere under the module, sorted.
    #[must_use]
    pub fn c_and_h_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = walkdir::WalkDir::new(&self.module.path)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .filter(|path| {
                matches!(
                    path.extension().and_then(|ext| ext.to_str()),
                    Some("c" | "h")
                )
            })
            .collect();
        files.sort();
        files
    }

    /// Rewrites a path relative to the check root for violation locations.
    #[must_use]
    pub fn relative(&self, path: &Path) -> PathBuf {
        path.strip_prefix(self.root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
    }
}
