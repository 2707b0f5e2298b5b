//! Migration SQL stub generation and idempotent script patching.
//!
//! For every migration script this ensures a pair of up/down SQL stub files
//! exists and that the script itself loads its SQL from them. Stubs are
//! never overwritten and already-patched scripts are left byte-identical,
//! so repeated runs change nothing.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use walkdir::WalkDir;

use crate::constants::{MIGRATION_QUERIES_DIR, MIGRATION_SCRIPTS_DIR};
use crate::error::Result;
use crate::fsutil::{read_file, write_file};
use crate::templates::MIGRATION_WRAPPER;

/// Marker proving a migration script already loads its SQL from files.
const WRAPPER_MARKER: &str = "fs.readFile";

/// Splits `<timestamp>_<name>.ts` into its timestamp prefix and name.
fn split_migration_name(file_name: &str) -> Option<(&str, &str)> {
    file_name.strip_suffix(".ts")?.split_once('_')
}

/// Lists migration scripts: `*.ts` files, excluding declaration files.
fn migration_scripts(scripts_dir: &Path) -> Vec<PathBuf> {
    let mut scripts: Vec<PathBuf> = WalkDir::new(scripts_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .map(|name| name.ends_with(".ts") && !name.ends_with(".d.ts"))
                .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();
    scripts.sort();
    scripts
}

/// Placeholder content for a new SQL stub.
fn sql_stub(migration_name: &str, direction: &str) -> String {
    format!("-- SQL for {} {} migration\n-- Add your SQL here\n", migration_name, direction)
}

/// The `sql-stubs` command.
pub fn run(project_dir: &Path) -> Result<()> {
    let scripts_dir = project_dir.join(MIGRATION_SCRIPTS_DIR);
    let queries_dir = project_dir.join(MIGRATION_QUERIES_DIR);
    fs::create_dir_all(&queries_dir)?;

    let scripts = migration_scripts(&scripts_dir);
    println!("Found {} migration files", scripts.len());

    for script in scripts {
        let file_name = match script.file_name().and_then(|name| name.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };
        let (timestamp, name) = match split_migration_name(&file_name) {
            Some(parts) => parts,
            None => {
                warn!("Skipping file {} - doesn't match expected format", file_name);
                continue;
            }
        };

        let stem = format!("{}_{}", timestamp, name);
        let up_sql = queries_dir.join(format!("{}.up.sql", stem));
        let down_sql = queries_dir.join(format!("{}.down.sql", stem));

        if !up_sql.exists() {
            write_file(&sql_stub(name, "up"), &up_sql)?;
            println!("Created {}", up_sql.display());
        }
        if !down_sql.exists() {
            write_file(&sql_stub(name, "down"), &down_sql)?;
            println!("Created {}", down_sql.display());
        }

        let content = read_file(&script)?;
        if !content.contains(WRAPPER_MARKER) {
            write_file(MIGRATION_WRAPPER, &script)?;
            println!("Updated {} to load its SQL from files", file_name);
        }
    }

    println!("SQL file creation complete.");
    Ok(())
}
