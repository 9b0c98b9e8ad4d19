use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::{Config, TOOL_SECTION};

pub fn generate_config() -> Result<()> {
    generate_config_at_path("pyproject.toml")
}

/// Add a `[tool.py-license-inventory]` table holding the default settings to
/// an existing pyproject.toml. The rest of the document is left untouched;
/// an existing table is replaced.
pub fn generate_config_at_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let pyproject_path = path.as_ref();

    if !pyproject_path.exists() {
        return Err(anyhow::anyhow!(
            "pyproject.toml not found at {}. Create the project first.",
            pyproject_path.display()
        ));
    }

    let existing_content = fs::read_to_string(pyproject_path)
        .with_context(|| format!("Failed to read {}", pyproject_path.display()))?;
    let mut doc = existing_content
        .parse::<toml_edit::DocumentMut>()
        .with_context(|| format!("Failed to parse {}", pyproject_path.display()))?;

    if !doc.contains_key("tool") {
        let mut tool = toml_edit::Table::new();
        tool.set_implicit(true);
        doc["tool"] = toml_edit::Item::Table(tool);
    }

    let tool_table = doc["tool"]
        .as_table_mut()
        .ok_or_else(|| anyhow::anyhow!("[tool] in {} is not a table", pyproject_path.display()))?;
    tool_table[TOOL_SECTION] = toml_edit::Item::Table(default_section());

    fs::write(pyproject_path, doc.to_string())
        .with_context(|| format!("Failed to write {}", pyproject_path.display()))?;
    tracing::debug!(path = %pyproject_path.display(), "wrote default configuration");
    Ok(())
}

fn default_section() -> toml_edit::Table {
    let config = Config::default();
    let options = config.collect_options();
    let source = config.license_source();

    let mut table = toml_edit::Table::new();
    table["format"] = toml_edit::value(config.format.unwrap_or_else(|| "table".to_string()));
    table["from"] = toml_edit::value(source.to_string());
    table["normalize_names"] = toml_edit::value(options.normalize_names);
    table["include_license_files"] = toml_edit::value(options.include_license_files);
    table["include_notice_files"] = toml_edit::value(options.include_notice_files);
    table
}
