//! Rule to require the logging tag marker in every C source file.
//!
//! # Rationale
//!
//! Each source file declares its diagnostic identity with a call-like
//! marker, e.g. `DEFINE_COMPONENT_TAG(DHT22)`. Log output from a file
//! without the marker cannot be attributed to its module.
//!
//! # Known gaps
//!
//! The test is a raw substring scan over the file, not a parse: a
//! marker inside a comment or an inactive `#ifdef` branch also
//! satisfies it.

use modlint_core::{CheckerConfig, Location, ModuleContext, ModuleRule, Severity, Violation};
use tracing::debug;

/// Rule code for component-tag.
pub const CODE: &str = "ML002";

/// Rule name for component-tag.
pub const NAME: &str = "component-tag";

/// Requires the tag marker in every `src/*.c` file.
#[derive(Debug, Clone)]
pub struct ComponentTag {
    severity: Severity,
    marker: String,
}

impl Default for ComponentTag {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentTag {
    /// Creates the rule with the default marker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
            marker: CheckerConfig::default().tag_marker,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the marker substring to require.
    #[must_use]
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }
}

impl ModuleRule for ComponentTag {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires the component tag marker in every C source file"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check_module(&self, ctx: &ModuleContext<'_>) -> Vec<Violation> {
        let mut violations = Vec::new();

        for file in ctx.source_files() {
            debug!("Scanning for {}: {}", self.marker, file.display());
            match std::fs::read_to_string(&file) {
                Ok(content) => {
                    if !content.contains(&self.marker) {
                        violations.push(
                            Violation::new(
                                CODE,
                                NAME,
                                self.severity,
                                Location::file(ctx.relative(&file)),
                                format!("source file is missing `{}(...)`", self.marker),
                            )
                            .with_suggestion(format!(
                                "Declare the file's diagnostic identity with `{}({})`",
                                self.marker,
                                ctx.module.name.to_uppercase()
                            )),
                        );
                    }
                }
                Err(e) => {
                    violations.push(Violation::read_failure(CODE, NAME, ctx.relative(&file), &e));
                }
            }
        }

        violations
    }
}
