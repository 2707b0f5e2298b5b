//! Endpoint file synthesis and the `endpoint` command flow.
//!
//! Renders the four fixed endpoint files from a confirmed plan, writes them
//! to their derived locations and hands the router file to the patcher.
//! There is no rollback: a failure mid-run leaves earlier writes in place.

use std::path::{Path, PathBuf};

use crate::constants::{ACTIONS_DIR, CONTROLLERS_DIR, ROUTES_DIR, ROUTE_FILE_SUFFIX, SRC_DIR};
use crate::error::Result;
use crate::fsutil::write_file;
use crate::plan::{build_plan, Plan};
use crate::prompt::Prompter;
use crate::renderer::TemplateRenderer;
use crate::router;
use crate::templates::{render_action, render_controller, render_query, render_schema};

/// Filesystem layout of one endpoint generation run.
#[derive(Debug)]
pub struct ScaffoldTargets {
    pub controller_file: PathBuf,
    pub schema_file: Option<PathBuf>,
    pub action_file: PathBuf,
    pub query_file: PathBuf,
    pub route_file: PathBuf,
}

/// Derives every target path for a plan. Pure; nothing is touched on disk.
pub fn scaffold_targets(project_dir: &Path, plan: &Plan) -> ScaffoldTargets {
    let src = project_dir.join(SRC_DIR);
    let controller_dir = src
        .join(CONTROLLERS_DIR)
        .join(&plan.scope)
        .join(&plan.domain)
        .join(plan.operation_name());
    let action_dir =
        src.join(ACTIONS_DIR).join(&plan.scope).join(&plan.domain).join(&plan.action_name);

    ScaffoldTargets {
        controller_file: controller_dir.join("index.ts"),
        schema_file: plan.needs_schema.then(|| {
            controller_dir
                .join("schema")
                .join(format!("{}.schema.ts", plan.operation_name()))
        }),
        action_file: action_dir.join("index.ts"),
        query_file: action_dir.join("queries").join(format!("{}.ts", plan.query_name)),
        route_file: src.join(ROUTES_DIR).join(format!("{}{}", plan.scope, ROUTE_FILE_SUFFIX)),
    }
}

/// Leaf files of a run that already exist on disk.
pub fn existing_targets(targets: &ScaffoldTargets) -> Vec<PathBuf> {
    [
        Some(&targets.controller_file),
        targets.schema_file.as_ref(),
        Some(&targets.action_file),
        Some(&targets.query_file),
    ]
    .into_iter()
    .flatten()
    .filter(|file| file.exists())
    .cloned()
    .collect()
}

/// Renders and writes the endpoint files, then patches the router file.
///
/// # Errors
/// * `Error::IoError` if a parent directory or file cannot be created
/// * `Error::TemplateError` if rendering fails
pub fn write_endpoint(
    engine: &dyn TemplateRenderer,
    project_dir: &Path,
    plan: &Plan,
) -> Result<ScaffoldTargets> {
    let targets = scaffold_targets(project_dir, plan);

    write_file(&render_controller(engine, plan)?, &targets.controller_file)?;
    if let Some(schema_file) = &targets.schema_file {
        write_file(&render_schema(engine, plan)?, schema_file)?;
    }
    write_file(&render_action(engine, plan)?, &targets.action_file)?;
    write_file(&render_query(engine, plan)?, &targets.query_file)?;

    router::patch_router_file(&targets.route_file, plan)?;

    Ok(targets)
}

/// The `endpoint` command: plan interactively, then generate.
///
/// Existing leaf files require explicit confirmation before they are
/// replaced, unless `force` is set. Declining leaves the project untouched.
pub fn run(
    prompt: &dyn Prompter,
    engine: &dyn TemplateRenderer,
    project_dir: &Path,
    force: bool,
) -> Result<()> {
    let plan = build_plan(prompt, project_dir)?;

    let targets = scaffold_targets(project_dir, &plan);
    let present = existing_targets(&targets);
    if !present.is_empty() && !force {
        println!("The following files already exist:");
        for file in &present {
            println!("  {}", file.display());
        }
        if !prompt.confirm("Overwrite them?", false)? {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let targets = write_endpoint(engine, project_dir, &plan)?;

    println!("\nEndpoint created successfully!");
    println!("Controller: {}", targets.controller_file.display());
    if let Some(schema_file) = &targets.schema_file {
        println!("Schema:     {}", schema_file.display());
    }
    println!("Action:     {}", targets.action_file.display());
    println!("Query:      {}", targets.query_file.display());
    println!("Route:      {}", targets.route_file.display());
    Ok(())
}
