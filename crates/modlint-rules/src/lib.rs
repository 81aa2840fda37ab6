//! # modlint-rules
//!
//! Built-in convention rules for modlint.
//!
//! ## Available Rules
//!
//! | Code  | Name                | Description |
//! |-------|---------------------|-------------|
//! | ML001 | `required-files`    | Requires the scaffolded module layout |
//! | ML002 | `component-tag`     | Requires the tag marker in every C source file |
//! | ML003 | `doc-comments`      | Requires documentation blocks on public declarations |
//! | ML004 | `include-isolation` | Forbids direct includes of peer module headers |
//!
//! ## Usage
//!
//! ```ignore
//! use modlint_core::{Checker, Config};
//! use modlint_rules::all_rules;
//!
//! let config = Config::default();
//! let mut builder = Checker::builder().root("./firmware").config(config.clone());
//! for rule in all_rules(&config)? {
//!     builder = builder.rule_box(rule);
//! }
//! let result = builder.build()?.check()?;
//! ```
//!
//! The rule set is an ordered collection: extending the checker means
//! appending to [`all_rules`], never touching the runner.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod component_tag;
mod doc_comments;
mod include_isolation;
mod required_files;

pub use component_tag::ComponentTag;
pub use doc_comments::DocComments;
pub use include_isolation::IncludeIsolation;
pub use required_files::RequiredFiles;

/// Re-export core types for convenience.
pub use modlint_core::{ModuleRule, ModuleRuleBox, Severity, Violation};

use modlint_core::{Config, ConfigError};

/// Builds the full built-in rule set, configured from `config`.
///
/// # Errors
///
/// Returns an error if an allow-list regex in the config does not
/// compile.
pub fn all_rules(config: &Config) -> Result<Vec<ModuleRuleBox>, ConfigError> {
    let allowed = config.checker.compile_allowed_includes()?;
    Ok(vec![
        Box::new(RequiredFiles::new().required_files(config.checker.required_files.clone())),
        Box::new(ComponentTag::new().marker(config.checker.tag_marker.clone())),
        Box::new(DocComments::new()),
        Box::new(IncludeIsolation::new().allowed(allowed)),
    ])
}
