//! Rule to require documentation blocks on public header declarations.
//!
//! # Rationale
//!
//! The module's public header is its contract with the rest of the
//! system; every function it declares must carry a documentation block
//! so generated docs stay complete.
//!
//! # Detection
//!
//! Purely lexical, line by line: a candidate declaration is a single
//! line shaped like `type [*] name(args);` that does not start with the
//! `static` storage class. The candidate is documented when the first
//! non-blank line above it begins with the `/**` block opener.
//!
//! # Known gaps
//!
//! Declarations split across lines are not matched, and declarations
//! inside inactive conditional-compilation blocks are still checked.

use modlint_core::{Location, ModuleContext, ModuleRule, Severity, Violation};
use once_cell::sync::Lazy;
use regex::Regex;

/// Rule code for doc-comments.
pub const CODE: &str = "ML003";

/// Rule name for doc-comments.
pub const NAME: &str = "doc-comments";

/// Single-line declaration shape: type tokens, optional pointer markers,
/// a name, a parenthesized argument list, a trailing semicolon.
#[allow(clippy::expect_used)]
static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\w+[\w\s\*]+\s+\w+\s*\(.*\)\s*;").expect("declaration pattern is valid")
});

/// Token that opens a documentation block.
const DOC_OPENER: &str = "/**";

/// Requires a documentation block above every public declaration in the
/// module's public header.
#[derive(Debug, Clone)]
pub struct DocComments {
    severity: Severity,
}

impl Default for DocComments {
    fn default() -> Self {
        Self::new()
    }
}

impl DocComments {
    /// Creates the rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl ModuleRule for DocComments {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires a documentation block above every public declaration in the public header"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check_module(&self, ctx: &ModuleContext<'_>) -> Vec<Violation> {
        let header = ctx.module.public_header();
        if !header.is_file() {
            // The required-files rule already reports the absent header.
            return Vec::new();
        }

        let content = match std::fs::read_to_string(&header) {
            Ok(content) => content,
            Err(e) => {
                return vec![Violation::read_failure(CODE, NAME, ctx.relative(&header), &e)];
            }
        };

        let lines: Vec<&str> = content.lines().collect();
        let mut violations = Vec::new();

        for (index, line) in lines.iter().enumerate() {
            let trimmed = line.trim();
            if !is_candidate_declaration(trimmed) {
                continue;
            }
            if has_doc_block_before(index, &lines) {
                continue;
            }

            let symbol = declared_symbol(trimmed);
            violations.push(
                Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    Location::line(ctx.relative(&header), index + 1),
                    format!("public function `{symbol}` is missing a documentation comment"),
                )
                .with_suggestion(format!(
                    "Add a `{DOC_OPENER} ... */` block immediately above the declaration"
                )),
            );
        }

        violations
    }
}

/// Returns true for a single-line non-static function declaration.
fn is_candidate_declaration(trimmed: &str) -> bool {
    DECLARATION.is_match(trimmed) && !starts_with_static(trimmed)
}

/// Word-boundary test for the `static` storage class at line start.
fn starts_with_static(trimmed: &str) -> bool {
    trimmed.strip_prefix("static").is_some_and(|rest| {
        rest.chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric() && c != '_')
    })
}

/// Scans backward from the candidate, skipping blank lines; the first
/// non-blank line must begin with the documentation-block opener.
fn has_doc_block_before(index: usize, lines: &[&str]) -> bool {
    for previous in lines[..index].iter().rev() {
        let trimmed = previous.trim();
        if trimmed.is_empty() {
            continue;
        }
        return trimmed.starts_with(DOC_OPENER);
    }
    false
}

/// Best-effort symbol name: the token immediately before the opening
/// parenthesis, with pointer markers stripped.
fn declared_symbol(trimmed: &str) -> String {
    trimmed
        .split('(')
        .next()
        .and_then(|before| before.split_whitespace().last())
        .map_or_else(|| String::from("<unknown>"), |token| token.replace('*', ""))
}
