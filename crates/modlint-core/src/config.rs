//! Configuration types for modlint.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration for modlint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Checker-level configuration.
    #[serde(default)]
    pub checker: CheckerConfig,

    /// Per-rule configurations.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<crate::Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }
}

/// Checker-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Directory holding the two-level category/module tree, relative to
    /// the checked path.
    #[serde(default = "default_modules_root")]
    pub modules_root: PathBuf,

    /// Files every module must carry at its top level.
    #[serde(default = "default_required_files")]
    pub required_files: Vec<String>,

    /// Marker every C source file must contain.
    #[serde(default = "default_tag_marker")]
    pub tag_marker: String,

    /// Include targets modules may use besides angle-bracket system
    /// includes and their own headers.
    #[serde(default = "default_allowed_includes")]
    pub allowed_includes: Vec<IncludePattern>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            modules_root: default_modules_root(),
            required_files: default_required_files(),
            tag_marker: default_tag_marker(),
            allowed_includes: default_allowed_includes(),
        }
    }
}

impl CheckerConfig {
    /// Compiles the configured allow-list into a reusable matcher set.
    ///
    /// # Errors
    ///
    /// Returns an error if a regex pattern does not compile.
    pub fn compile_allowed_includes(&self) -> Result<IncludeMatcher, ConfigError> {
        IncludeMatcher::compile(&self.allowed_includes)
    }
}

fn default_modules_root() -> PathBuf {
    PathBuf::from("components/modules")
}

fn default_required_files() -> Vec<String> {
    ["CMakeLists.txt", "module.json", "README.md"]
        .map(String::from)
        .to_vec()
}

fn default_tag_marker() -> String {
    String::from("DEFINE_COMPONENT_TAG")
}

fn default_allowed_includes() -> Vec<IncludePattern> {
    vec![
        // Platform SDK headers
        IncludePattern::Regex(r"^esp_.*\.h$".to_string()),
        IncludePattern::Prefix("driver/".to_string()),
        IncludePattern::Prefix("freertos/".to_string()),
        IncludePattern::Exact("nvs_flash.h".to_string()),
        IncludePattern::Exact("cJSON.h".to_string()),
        // Framework core and interface headers
        IncludePattern::Exact("service_locator.h".to_string()),
        IncludePattern::Exact("base_module.h".to_string()),
        IncludePattern::Exact("logging.h".to_string()),
        IncludePattern::Exact("event_bus.h".to_string()),
        IncludePattern::Exact("config_manager.h".to_string()),
        IncludePattern::Exact("module_registry.h".to_string()),
        IncludePattern::Exact("system_manager.h".to_string()),
        IncludePattern::Exact("resource_manager.h".to_string()),
        IncludePattern::Exact("framework_config.h".to_string()),
        IncludePattern::Exact("service_types.h".to_string()),
        IncludePattern::Exact("telemetry_events.h".to_string()),
    ]
}

/// A single allow-list matcher over an include target.
///
/// In TOML these are written as one-key tables:
///
/// ```toml
/// allowed_includes = [
///     { exact = "cJSON.h" },
///     { prefix = "driver/" },
///     { regex = '^esp_.*\.h$' },
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncludePattern {
    /// Exact target match.
    Exact(String),
    /// Target path prefix match.
    Prefix(String),
    /// Regular-expression match over the target.
    Regex(String),
}

/// Compiled allow-list ready for repeated matching.
#[derive(Debug, Clone, Default)]
pub struct IncludeMatcher {
    exact: Vec<String>,
    prefixes: Vec<String>,
    regexes: Vec<regex::Regex>,
}

impl IncludeMatcher {
    /// Compiles a list of patterns into a matcher set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Pattern`] for a regex that does not compile.
    pub fn compile(patterns: &[IncludePattern]) -> Result<Self, ConfigError> {
        let mut matcher = Self::default();
        for pattern in patterns {
            match pattern {
                IncludePattern::Exact(s) => matcher.exact.push(s.clone()),
                IncludePattern::Prefix(s) => matcher.prefixes.push(s.clone()),
                IncludePattern::Regex(s) => {
                    let compiled = regex::Regex::new(s).map_err(|e| ConfigError::Pattern {
                        pattern: s.clone(),
                        message: e.to_string(),
                    })?;
                    matcher.regexes.push(compiled);
                }
            }
        }
        Ok(matcher)
    }

    /// Returns true if `target` is allowed by any configured pattern.
    #[must_use]
    pub fn matches(&self, target: &str) -> bool {
        self.exact.iter().any(|e| e == target)
            || self.prefixes.iter().any(|p| target.starts_with(p.as_str()))
            || self.regexes.iter().any(|r| r.is_match(target))
    }
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<crate::Severity>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// Invalid allow-list regex pattern.
    #[error("Invalid include pattern `{pattern}`: {message}")]
    Pattern {
        /// The offending pattern.
        pattern: String,
        /// Regex compile error message.
        message: String,
    },
}
