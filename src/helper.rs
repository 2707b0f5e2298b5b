//! Reusable schema-helper generation and the `helper` command.

use std::path::Path;

use cruet::Inflector;

use crate::constants::{SCHEMA_HELPERS_DIR, SRC_DIR};
use crate::error::{Error, Result};
use crate::fsutil::write_file;
use crate::prompt::Prompter;
use crate::renderer::TemplateRenderer;
use crate::templates::render_helper;

/// Asks for a free-text helper name, camel-cases it and writes the helper
/// stub under `src/schemaHelpers/`. An existing file requires explicit
/// confirmation before being replaced; declining cancels the run.
pub fn run(
    prompt: &dyn Prompter,
    engine: &dyn TemplateRenderer,
    project_dir: &Path,
) -> Result<()> {
    let raw_name = prompt.input("Enter helper name (e.g. \"select user by id\")", None)?;
    let helper_name = raw_name.trim().to_camel_case();
    if helper_name.is_empty() {
        return Err(Error::ValidationError("helper name cannot be empty".to_string()));
    }

    let target = project_dir
        .join(SRC_DIR)
        .join(SCHEMA_HELPERS_DIR)
        .join(format!("{}.ts", helper_name));

    if target.exists() {
        let message = format!("Helper {} already exists. Overwrite?", helper_name);
        if !prompt.confirm(&message, false)? {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    write_file(&render_helper(engine, &helper_name)?, &target)?;

    println!("\nSchema helper created at {}.", target.display());
    Ok(())
}
