use std::path::Path;

use anyhow::Result;

use pkg_scaffold_core::copier;
use pkg_scaffold_core::generator::{Generator, WebpackLibraryGenerator};
use pkg_scaffold_core::project::{self, MANIFEST_FILE};

use crate::output;

/// Regenerate the scaffolding of the package in `dir`.
///
/// Loads and validates the manifest and bundle description, renders every file into
/// `.template/`, then copies them over the project root. Inputs are fully loaded
/// before anything is written, so a missing `package.json` leaves no partial output.
pub async fn run(dir: &Path, template: Option<&Path>, no_copy: bool) -> Result<()> {
    output::print_header(&format!("pkg-scaffold generate: {}", dir.display()));
    let total = if no_copy { 3 } else { 4 };
    tracing::debug!(dir = %dir.display(), ?template, no_copy, "starting generation");

    output::print_step(1, total, &format!("Loading {MANIFEST_FILE} and bundle description"));
    let config = project::load_config(dir, template)?;
    output::print_key_value("Package", &format!("{}@{}", config.name(), config.version()));
    output::print_key_value("Type", config.package_type.as_str());
    output::print_key_value(
        "Modules",
        &format!("main + {} auxiliary", config.bundles.auxiliary_modules.len()),
    );

    let generator = create_generator();
    tracing::debug!(generator = generator.name(), "selected generator");
    output::print_step(
        2,
        total,
        &format!("Generating scaffolding ({})", generator.display_name()),
    );
    let generated = generator.generate(dir, &config).await?;
    output::print_key_value("Output", &generated.dir.display().to_string());

    if !no_copy {
        output::print_step(3, total, "Copying generated files into the project");
        let report = copier::copy_templates(dir)?;
        for file in &report.updated {
            output::print_key_value("updated", &file.display().to_string());
        }
        if !report.unchanged.is_empty() {
            output::print_key_value("unchanged", &report.unchanged.len().to_string());
        }
    }

    output::print_step(total, total, "Checking prerequisites");
    match generator.check_prerequisites() {
        Ok(()) => output::print_success("All required tools found"),
        Err(missing) => {
            for m in &missing {
                output::print_warning(&format!(
                    "Missing: {} — install: {}",
                    m.tool_name, m.install_instructions
                ));
            }
        }
    }
    for w in generator.check_versions() {
        output::print_warning(&format!(
            "{}: found v{}, minimum v{} recommended",
            w.tool_name, w.found_version, w.minimum_version
        ));
    }

    output::print_success(&format!("Scaffolding generated for '{}'", config.name()));
    println!();
    println!("  Next steps:");
    println!("    yarn");
    println!("    yarn build:dev");
    println!();

    Ok(())
}

/// Create the generator used for every package.
pub fn create_generator() -> Box<dyn Generator> {
    Box::new(WebpackLibraryGenerator::new())
}
