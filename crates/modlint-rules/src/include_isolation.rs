//! Rule to forbid direct includes of peer module headers.
//!
//! # Rationale
//!
//! Modules collaborate through the framework's indirection layer (event
//! bus, service lookup), never by including each other's public headers.
//! A direct `#include "peer.h"` couples two modules at build time and
//! defeats the plugin architecture.
//!
//! # Detection
//!
//! Deliberately narrow: only an include whose target exactly matches
//! `<other_module>.h` for another cataloged module is forbidden.
//! Angle-bracket system includes, the module's own headers, the
//! configured allow-list, and anything not naming a known peer all pass.

use modlint_core::{
    CheckerConfig, IncludeMatcher, Location, ModuleContext, ModuleRule, Severity, Violation,
};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Rule code for include-isolation.
pub const CODE: &str = "ML004";

/// Rule name for include-isolation.
pub const NAME: &str = "include-isolation";

/// Line-anchored include directive, capturing the bracket style and the
/// target between the delimiters.
#[allow(clippy::expect_used)]
static INCLUDE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*#include\s+(["<])([^">]+)[">]"#).expect("include pattern is valid")
});

/// Forbids direct includes of other modules' public headers.
#[derive(Debug, Clone)]
pub struct IncludeIsolation {
    severity: Severity,
    allowed: IncludeMatcher,
}

impl Default for IncludeIsolation {
    fn default() -> Self {
        Self::new()
    }
}

impl IncludeIsolation {
    /// Creates the rule with the built-in allow-list.
    #[must_use]
    pub fn new() -> Self {
        #[allow(clippy::expect_used)]
        let allowed = CheckerConfig::default()
            .compile_allowed_includes()
            .expect("built-in allow-list patterns are valid");
        Self {
            severity: Severity::Error,
            allowed,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Replaces the allow-list with a compiled matcher set.
    #[must_use]
    pub fn allowed(mut self, allowed: IncludeMatcher) -> Self {
        self.allowed = allowed;
        self
    }

    /// Decides whether an include target is permitted for this module.
    fn is_allowed(&self, target: &str, ctx: &ModuleContext<'_>) -> bool {
        // Self-includes, including private headers prefixed with the
        // module name.
        if target.starts_with(ctx.module.name.as_str()) {
            return true;
        }
        if self.allowed.matches(target) {
            return true;
        }
        // Forbidden only when the target is exactly a peer's public
        // header; everything else is outside this rule's scope.
        ctx.catalog
            .peer_for_header(target, &ctx.module.name)
            .is_none()
    }
}

impl ModuleRule for IncludeIsolation {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids direct includes of other modules' public headers"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check_module(&self, ctx: &ModuleContext<'_>) -> Vec<Violation> {
        let mut violations = Vec::new();

        for file in ctx.c_and_h_files() {
            debug!("Scanning includes: {}", file.display());
            let content = match std::fs::read_to_string(&file) {
                Ok(content) => content,
                Err(e) => {
                    violations.push(Violation::read_failure(CODE, NAME, ctx.relative(&file), &e));
                    continue;
                }
            };

            for (index, line) in content.lines().enumerate() {
                let Some(captures) = INCLUDE.captures(line) else {
                    continue;
                };
                if &captures[1] == "<" {
                    // System and third-party angle includes are always
                    // outside the isolation boundary.
                    continue;
                }
                let target = captures[2].trim();
                if self.is_allowed(target, ctx) {
                    continue;
                }

                violations.push(
                    Violation::new(
                        CODE,
                        NAME,
                        self.severity,
                        Location::line(ctx.relative(&file), index + 1),
                        format!("forbidden direct include of peer module header `{target}`"),
                    )
                    .with_suggestion(
                        "Collaborate through the event bus or service lookup instead of \
                         including peer headers",
                    ),
                );
            }
        }

        violations
    }
}
