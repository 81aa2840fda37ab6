//! Shared output formatting for check results.

use anyhow::Result;
use modlint_core::{CheckResult, Severity};

use crate::OutputFormat;

/// Print check results in the specified format.
pub fn print(result: &CheckResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
    }
    Ok(())
}

fn print_text(result: &CheckResult) {
    for violation in &result.violations {
        let tag = match violation.severity {
            Severity::Error => "\x1b[91m[ERROR]\x1b[0m",
            Severity::Warning => "\x1b[93m[WARN]\x1b[0m",
            Severity::Info => "\x1b[94m[INFO]\x1b[0m",
        };

        println!(
            "{} {}: [{}] {}",
            tag, violation.location, violation.code, violation.message
        );
        if let Some(suggestion) = &violation.suggestion {
            println!("        = help: {suggestion}");
        }
    }

    let (errors, warnings, _) = result.count_by_severity();

    println!("\n{}", "=".repeat(50));
    if result.is_clean() {
        println!(
            "\x1b[92mAll conventions passed in {} module(s).\x1b[0m",
            result.modules_checked
        );
    } else {
        println!(
            "\x1b[91mCheck finished with {} problem(s) ({} error(s), {} warning(s)) in {} module(s).\x1b[0m",
            result.violations.len(),
            errors,
            warnings,
            result.modules_checked
        );
    }
    println!("{}", "=".repeat(50));
}

fn print_json(result: &CheckResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &CheckResult) {
    for violation in &result.violations {
        println!("{violation}");
    }
}
