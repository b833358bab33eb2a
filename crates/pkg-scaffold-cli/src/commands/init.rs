use std::path::Path;

use anyhow::Result;

use pkg_scaffold_core::project::{self, MANIFEST_FILE};

use crate::output;

/// Write a starter `template.json` into `dir`.
///
/// Refuses to overwrite an existing file. Warns when the directory has no
/// `package.json` yet, since `generate` needs one.
pub async fn run(dir: &Path) -> Result<()> {
    output::print_header(&format!("pkg-scaffold init: {}", dir.display()));

    let path = project::write_starter_spec(dir)?;
    output::print_success(&format!("Created {}", path.display()));

    if !dir.join(MANIFEST_FILE).exists() {
        output::print_warning(&format!(
            "no {MANIFEST_FILE} in {}: create one with name, version, description and author",
            dir.display()
        ));
    }

    println!();
    println!("  Next steps:");
    println!("    edit template.json (externals, mainModule, auxiliaryModules)");
    println!("    pkg-scaffold generate");
    println!();

    Ok(())
}
