//! Rule trait for defining convention checks.

use crate::context::ModuleContext;
use crate::types::{Severity, Violation};

/// A convention rule evaluated once per discovered module.
///
/// Implementations are stateless and pure with respect to their inputs:
/// they receive the module context and return their own violation list,
/// which the checker merges. Rules never share mutable state, so they
/// are safe to run in any order.
///
/// # Example
///
/// ```ignore
/// use modlint_core::{Location, ModuleContext, ModuleRule, Severity, Violation};
///
/// pub struct RequireChangelog;
///
/// impl ModuleRule for RequireChangelog {
///     fn name(&self) -> &'static str { "require-changelog" }
///     fn code(&self) -> &'static str { "ML100" }
///
///     fn check_module(&self, ctx: &ModuleContext<'_>) -> Vec<Violation> {
///         if ctx.module.path.join("CHANGELOG.md").is_file() {
///             vec![]
///         } else {
///             vec![Violation::new(
///                 self.code(),
///                 self.name(),
///                 Severity::Warning,
///                 Location::file(ctx.relative(&ctx.module.path)),
///                 "module has no CHANGELOG.md",
///             )]
///         }
///     }
/// }
/// ```
pub trait ModuleRule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "component-tag").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "ML002").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks a single module and returns any violations found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The module under check, the catalog of all discovered
    ///   module names, and the check root.
    ///
    /// # Returns
    ///
    /// A vector of violations found in this module.
    fn check_module(&self, ctx: &ModuleContext<'_>) -> Vec<Violation>;
}

/// Type alias for boxed `ModuleRule` trait objects.
pub type ModuleRuleBox = Box<dyn ModuleRule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::{Module, ModuleCatalog};
    use crate::types::Location;

    struct TestRule;

    impl ModuleRule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn check_module(&self, ctx: &ModuleContext<'_>) -> Vec<Violation> {
            vec![Violation::new(
                self.code(),
                self.name(),
                self.default_severity(),
                Location::file(ctx.relative(&ctx.module.path)),
                "Test violation",
            )]
        }
    }

    #[test]
    fn rule_trait_defaults() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Error);
    }

    #[test]
    fn rule_reports_through_context() {
        let module = Module::new("dht22", "sensors", "/tree/sensors/dht22");
        let catalog = ModuleCatalog::from_modules(std::slice::from_ref(&module));
        let ctx = ModuleContext::new(&module, &catalog, std::path::Path::new("/tree"));

        let violations = TestRule.check_module(&ctx);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].location.file,
            std::path::PathBuf::from("sensors/dht22")
        );
    }
}
