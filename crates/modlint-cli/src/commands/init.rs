//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# modlint configuration

[checker]
# Directory holding the two-level category/module tree,
# relative to the checked path
modules_root = "components/modules"

# Files every module must carry at its top level
required_files = ["CMakeLists.txt", "module.json", "README.md"]

# Marker every C source file must contain
tag_marker = "DEFINE_COMPONENT_TAG"

# Include targets allowed from any module, besides angle-bracket
# system includes and the module's own headers
allowed_includes = [
    # Platform SDK headers
    { regex = '^esp_.*\.h$' },
    { prefix = "driver/" },
    { prefix = "freertos/" },
    { exact = "nvs_flash.h" },
    { exact = "cJSON.h" },
    # Framework core and interface headers
    { exact = "service_locator.h" },
    { exact = "base_module.h" },
    { exact = "logging.h" },
    { exact = "event_bus.h" },
    { exact = "config_manager.h" },
    { exact = "module_registry.h" },
    { exact = "system_manager.h" },
    { exact = "resource_manager.h" },
    { exact = "framework_config.h" },
    { exact = "service_types.h" },
    { exact = "telemetry_events.h" },
]

# Rule configurations
# Each rule can be disabled or have its severity overridden

# [rules.doc-comments]
# enabled = false

# [rules.component-tag]
# severity = "warning"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("modlint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created modlint.toml");
    println!("\nNext steps:");
    println!("  1. Edit modlint.toml to adjust the allow-list and rules");
    println!("  2. Run: modlint check");

    Ok(())
}
