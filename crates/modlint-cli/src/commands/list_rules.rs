//! List rules command implementation.

use modlint_core::Config;
use modlint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<20} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in all_rules(&Config::default()).unwrap_or_default() {
        println!(
            "{:<10} {:<20} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  modlint check --rules required-files,include-isolation");
    println!("  modlint check --rules ML001,ML004");
}
