//! Check command implementation.

use anyhow::{Context, Result};
use modlint_core::{Checker, CheckerError, Config, IncludeMatcher, ModuleRuleBox};
use modlint_rules::{
    all_rules, ComponentTag, DocComments, IncludeIsolation, RequiredFiles,
};
use std::path::Path;

use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<String>,
    config_path: Option<&Path>,
) -> Result<()> {
    let source = crate::config_resolver::resolve(path, config_path);
    let config = match source.path() {
        None => Config::default(),
        Some(p) => {
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p)
                .with_context(|| format!("Failed to load config: {}", p.display()))?
        }
    };

    let rules_to_add = if let Some(filter) = rules_filter {
        let rule_names: Vec<&str> = filter.split(',').map(str::trim).collect();
        filter_rules(&rule_names, &config)?
    } else {
        all_rules(&config).context("Failed to assemble rule set")?
    };

    let mut builder = Checker::builder().root(path).config(config);
    for rule in rules_to_add {
        builder = builder.rule_box(rule);
    }

    let checker = builder.build().context("Failed to build checker")?;

    tracing::info!("Checking {:?} with {} rules", path, checker.rule_count());

    let result = match checker.check() {
        Ok(result) => result,
        Err(CheckerError::Discovery(e)) => {
            // Fatal: the module walk failed, so no rule ran. One distinct
            // top-level message, failure exit.
            eprintln!("\x1b[91m[ERROR]\x1b[0m {e}");
            std::process::exit(1);
        }
        Err(e) => return Err(e).context("Check failed"),
    };

    super::output::print(&result, format)?;

    // Exit with error code when any violation was recorded
    if !result.is_clean() {
        std::process::exit(1);
    }

    Ok(())
}

fn filter_rules(names: &[&str], config: &Config) -> Result<Vec<ModuleRuleBox>> {
    let allowed: IncludeMatcher = config
        .checker
        .compile_allowed_includes()
        .context("Failed to compile include allow-list")?;

    let mut rules: Vec<ModuleRuleBox> = Vec::new();
    for name in names {
        match *name {
            "required-files" | "ML001" => rules.push(Box::new(
                RequiredFiles::new().required_files(config.checker.required_files.clone()),
            )),
            "component-tag" | "ML002" => {
                rules.push(Box::new(
                    ComponentTag::new().marker(config.checker.tag_marker.clone()),
                ));
            }
            "doc-comments" | "ML003" => rules.push(Box::new(DocComments::new())),
            "include-isolation" | "ML004" => {
                rules.push(Box::new(IncludeIsolation::new().allowed(allowed.clone())));
            }
            _ => tracing::warn!("Unknown rule: {}", name),
        }
    }

    Ok(rules)
}
