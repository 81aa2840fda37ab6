//! Rule to require the scaffolded file layout in every module.
//!
//! # Rationale
//!
//! Every module is generated from the same archetype: a build
//! descriptor, a metadata descriptor, a README, a public header named
//! after the module, and at least one C source file. Tooling across the
//! project assumes that layout, so a module missing any of it is broken
//! regardless of what its code does.
//!
//! All missing items for a module are aggregated into a single
//! violation. One finding per module keeps the report readable when a
//! freshly created module is missing everything at once.

use modlint_core::{CheckerConfig, Location, ModuleContext, ModuleRule, Severity, Violation};

/// Rule code for required-files.
pub const CODE: &str = "ML001";

/// Rule name for required-files.
pub const NAME: &str = "required-files";

/// Requires every module to carry the scaffolded file layout.
#[derive(Debug, Clone)]
pub struct RequiredFiles {
    severity: Severity,
    required: Vec<String>,
}

impl Default for RequiredFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl RequiredFiles {
    /// Creates the rule with the default required file list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
            required: CheckerConfig::default().required_files,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the list of top-level files every module must carry.
    #[must_use]
    pub fn required_files(mut self, files: Vec<String>) -> Self {
        self.required = files;
        self
    }
}

impl ModuleRule for RequiredFiles {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires the scaffolded module layout (build descriptor, metadata, README, public header, sources)"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check_module(&self, ctx: &ModuleContext<'_>) -> Vec<Violation> {
        let module = ctx.module;
        let mut missing: Vec<String> = Vec::new();

        for required in &self.required {
            if !module.path.join(required).is_file() {
                missing.push(required.clone());
            }
        }

        if !module.public_header().is_file() {
            missing.push(format!("include/{}.h", module.name));
        }

        if ctx.source_files().is_empty() {
            missing.push("src/*.c (at least one C source file)".to_string());
        }

        if missing.is_empty() {
            return Vec::new();
        }

        vec![Violation::new(
            CODE,
            NAME,
            self.severity,
            Location::file(ctx.relative(&module.path)),
            format!("missing required files: {}", missing.join(", ")),
        )
        .with_suggestion(
            "Recreate the module from the archetype or add the missing files by hand",
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modlint_core::{Module, ModuleCatalog};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn scaffold(root: &Path, name: &str, skip: &[&str]) -> Module {
        let path = root.join("sensors").join(name);
        fs::create_dir_all(path.join("src")).unwrap();
        fs::create_dir_all(path.join("include")).unwrap();

        for file in ["CMakeLists.txt", "module.json", "README.md"] {
            if !skip.contains(&file) {
                fs::write(path.join(file), "x").unwrap();
            }
        }
        if !skip.contains(&"header") {
            fs::write(path.join("include").join(format!("{name}.h")), "").unwrap();
        }
        if !skip.contains(&"source") {
            fs::write(path.join("src").join(format!("{name}.c")), "").unwrap();
        }
        Module::new(name, "sensors", path)
    }

    fn check(root: &Path, module: &Module) -> Vec<Violation> {
        let catalog = ModuleCatalog::from_modules(std::slice::from_ref(module));
        let ctx = ModuleContext::new(module, &catalog, root);
        RequiredFiles::new().check_module(&ctx)
    }

    #[test]
    fn complete_module_passes() {
        let tmp = TempDir::new().unwrap();
        let module = scaffold(tmp.path(), "dht22", &[]);
        assert!(check(tmp.path(), &module).is_empty());
    }

    #[test]
    fn all_missing_items_aggregate_into_one_violation() {
        let tmp = TempDir::new().unwrap();
        let module = scaffold(tmp.path(), "dht22", &["module.json", "README.md", "header"]);

        let violations = check(tmp.path(), &module);
        assert_eq!(violations.len(), 1, "one aggregated violation per module");
        let message = &violations[0].message;
        assert!(message.contains("module.json"));
        assert!(message.contains("README.md"));
        assert!(message.contains("include/dht22.h"));
        assert!(!message.contains("CMakeLists.txt"));
    }

    #[test]
    fn empty_src_dir_counts_as_missing_sources() {
        let tmp = TempDir::new().unwrap();
        let module = scaffold(tmp.path(), "dht22", &["source"]);

        let violations = check(tmp.path(), &module);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("src/*.c"));
    }

    #[test]
    fn violation_is_module_level() {
        let tmp = TempDir::new().unwrap();
        let module = scaffold(tmp.path(), "dht22", &["README.md"]);

        let violations = check(tmp.path(), &module);
        assert_eq!(violations[0].location.line, None);
        assert_eq!(
            violations[0].location.file,
            Path::new("sensors/dht22").to_path_buf()
        );
    }

    #[test]
    fn custom_required_list_is_respected() {
        let tmp = TempDir::new().unwrap();
        let module = scaffold(tmp.path(), "dht22", &["README.md"]);

        let rule = RequiredFiles::new().required_files(vec!["CMakeLists.txt".to_string()]);
        let catalog = ModuleCatalog::from_modules(std::slice::from_ref(&module));
        let ctx = ModuleContext::new(&module, &catalog, tmp.path());
        assert!(rule.check_module(&ctx).is_empty());
    }
}
