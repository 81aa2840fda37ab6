//! # modlint-core
//!
//! Core framework for checking module conventions in plugin-style
//! project trees.
//!
//! This crate provides the foundational traits and types for building
//! convention checkers. It includes:
//!
//! - [`ModuleRule`] trait for per-module structural and lexical rules
//! - [`discover_modules`] for walking the two-level category/module layout
//! - [`Checker`] for orchestrating rule execution
//! - [`Violation`] for representing findings
//!
//! All checks are heuristic and text-based: nothing here parses C,
//! expands macros, or resolves preprocessor conditionals.
//!
//! ## Example
//!
//! ```ignore
//! use modlint_core::{Checker, Config};
//!
//! let checker = Checker::builder()
//!     .root("./firmware")
//!     .config(Config::default())
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = checker.check()?;
//! assert!(result.is_clean());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod checker;
mod config;
mod context;
mod discovery;
mod module;
mod rule;
mod types;

pub use checker::{Checker, CheckerBuilder, CheckerError};
pub use config::{
    CheckerConfig, Config, ConfigError, IncludeMatcher, IncludePattern, RuleConfig,
};
pub use context::ModuleContext;
pub use discovery::{discover_modules, DiscoveryError};
pub use module::{Module, ModuleCatalog};
pub use rule::{ModuleRule, ModuleRuleBox};
pub use types::{CheckResult, Location, Severity, Violation};
