use std::path::Path;

use anyhow::Result;

use pkg_scaffold_core::project;

use crate::output;

/// Load and validate the configuration of the package in `dir` without writing anything.
///
/// With `json`, prints the resolved [`pkg_scaffold_core::config::TemplateConfig`]
/// to stdout instead of the summary.
pub async fn run(dir: &Path, template: Option<&Path>, json: bool) -> Result<()> {
    let config = project::load_config(dir, template)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    output::print_header(&format!("pkg-scaffold check: {}", dir.display()));
    output::print_key_value("Package", &format!("{}@{}", config.name(), config.version()));
    output::print_key_value("Type", config.package_type.as_str());
    output::print_key_value("Externals", &config.externals().len().to_string());
    output::print_key_value(
        "Main module",
        &format!(
            "{} ({} dependencies)",
            config.bundles.main_module.entry_file,
            config.bundles.main_module.load_dependencies.len()
        ),
    );
    for module in &config.bundles.auxiliary_modules {
        output::print_key_value(
            &module.name,
            &format!(
                "{} ({} dependencies)",
                module.entry_file,
                module.load_dependencies.len()
            ),
        );
    }
    output::print_success("Configuration is valid");

    Ok(())
}
