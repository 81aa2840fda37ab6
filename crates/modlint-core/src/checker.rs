//! Checker orchestrating discovery and rule execution.

use crate::config::Config;
use crate::context::ModuleContext;
use crate::discovery::{discover_modules, DiscoveryError};
use crate::module::ModuleCatalog;
use crate::rule::{ModuleRule, ModuleRuleBox};
use crate::types::{CheckResult, Violation};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while running a check.
#[derive(Debug, Error)]
pub enum CheckerError {
    /// IO error resolving the check root.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Module discovery failed; the run aborts before any rule executes.
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Builder for configuring a [`Checker`].
#[derive(Default)]
pub struct CheckerBuilder {
    root: Option<PathBuf>,
    rules: Vec<ModuleRuleBox>,
    config: Option<Config>,
}

impl CheckerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the project root to check.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a rule to the checker.
    #[must_use]
    pub fn rule<R: ModuleRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the checker.
    #[must_use]
    pub fn rule_box(mut self, rule: ModuleRuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the checker.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved for
    /// a relative root.
    pub fn build(self) -> Result<Checker, CheckerError> {
        let root = self.root.unwrap_or_else(|| PathBuf::from("."));
        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        Ok(Checker {
            root,
            rules: self.rules,
            config: self.config.unwrap_or_default(),
        })
    }
}

/// The runner that applies every registered rule to every discovered module.
///
/// Use [`Checker::builder()`] to construct an instance.
pub struct Checker {
    root: PathBuf,
    rules: Vec<ModuleRuleBox>,
    config: Config,
}

impl Checker {
    /// Creates a new builder for configuring a checker.
    #[must_use]
    pub fn builder() -> CheckerBuilder {
        CheckerBuilder::new()
    }

    /// Returns the project root being checked.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Discovers modules and applies every enabled rule to each of them.
    ///
    /// Rules never short-circuit: every violation from every module is
    /// collected in one pass. Discovery failures are fatal and surface
    /// before any rule executes.
    ///
    /// # Errors
    ///
    /// Returns [`CheckerError::Discovery`] when the module walk fails
    /// (unreadable root, empty catalog, duplicate module name).
    pub fn check(&self) -> Result<CheckResult, CheckerError> {
        let modules_root = self.root.join(&self.config.checker.modules_root);
        info!("Discovering modules under {}", modules_root.display());

        let modules = discover_modules(&modules_root)?;
        let catalog = ModuleCatalog::from_modules(&modules);
        info!("Discovered {} modules", modules.len());

        let mut result = CheckResult::new();
        for module in &modules {
            debug!("Checking module: {}/{}", module.category, module.name);
            let ctx = ModuleContext::new(module, &catalog, &self.root);

            for rule in &self.rules {
                if !self.config.is_rule_enabled(rule.name()) {
                    debug!("Skipping disabled rule: {}", rule.name());
                    continue;
                }

                let violations = rule.check_module(&ctx);
                let violations = self.apply_severity_override(rule.name(), violations);
                result.violations.extend(violations);
            }
            result.modules_checked += 1;
        }

        result.sort();

        info!(
            "Check complete: {} violations across {} modules",
            result.violations.len(),
            result.modules_checked
        );

        Ok(result)
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(
        &self,
        rule_name: &str,
        mut violations: Vec<Violation>,
    ) -> Vec<Violation> {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            for v in &mut violations {
                v.severity = severity;
            }
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_current_dir() {
        let checker = Checker::builder().build().expect("Failed to build checker");
        assert!(checker.root().is_absolute());
        assert_eq!(checker.rule_count(), 0);
    }

    #[test]
    fn builder_keeps_absolute_root() {
        let checker = Checker::builder()
            .root("/tmp/project")
            .build()
            .expect("Failed to build checker");
        assert_eq!(checker.root(), Path::new("/tmp/project"));
    }
}
