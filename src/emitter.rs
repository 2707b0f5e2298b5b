//! Rendering of the generated database type file and the `db-types` command.
//!
//! Column metadata is grouped per table in catalog order and rendered into
//! one interface block per table, with commonly auto-populated columns
//! marked optional. The output carries no timestamps, so identical schemas
//! emit byte-identical files.

use std::path::Path;

use indexmap::IndexMap;

use crate::config::DbConfig;
use crate::constants::DB_TYPES_FILE;
use crate::error::Result;
use crate::fsutil::write_file;
use crate::introspect::{self, ColumnMeta};
use crate::typemap;

const HEADER: &str = r#"/**
 * This file was automatically generated.
 * DO NOT MODIFY IT MANUALLY.
 */

import { ColumnType, Generated, Insertable, Selectable, Updateable } from 'kysely';

// Database interface with auto-generated fields marked as optional
export interface Database {
"#;

const FOOTER: &str = r#"}

// Utility types for better type safety
export type Row<Table extends keyof Database> = Selectable<Database[Table]>;
export type InsertRow<Table extends keyof Database> = Insertable<Database[Table]>;
export type UpdateRow<Table extends keyof Database> = Updateable<Database[Table]>;
"#;

/// Column names that are conventionally populated by the database.
const AUTO_COLUMN_NAMES: [&str; 3] = ["id", "created_at", "updated_at"];

/// Default expressions whose values the database produces itself.
const AUTO_DEFAULT_PATTERNS: [&str; 6] = [
    "uuid_generate",
    "now()",
    "CURRENT_TIMESTAMP",
    "CURRENT_DATE",
    "gen_random_uuid()",
    "uuid()",
];

/// Groups columns by table, preserving catalog order: table name ascending,
/// then intra-table ordinal order.
pub fn group_by_table(columns: Vec<ColumnMeta>) -> IndexMap<String, Vec<ColumnMeta>> {
    let mut groups: IndexMap<String, Vec<ColumnMeta>> = IndexMap::new();
    for column in columns {
        groups.entry(column.table_name.clone()).or_default().push(column);
    }
    groups
}

/// Decides whether a column is commonly auto-populated, which makes its
/// field optional in the emitted types. True when the column name is a
/// known auto-generated name, even without a default, or when the default
/// expression is a sequence, uuid or timestamp function.
pub fn is_auto_generated(column: &ColumnMeta) -> bool {
    if AUTO_COLUMN_NAMES.contains(&column.column_name.as_str()) {
        return true;
    }
    match &column.column_default {
        Some(default) => {
            default.starts_with("nextval")
                || AUTO_DEFAULT_PATTERNS.iter().any(|pattern| default.contains(pattern))
        }
        None => false,
    }
}

/// Renders the complete type file from grouped column metadata.
pub fn emit(groups: &IndexMap<String, Vec<ColumnMeta>>) -> String {
    let mut out = String::from(HEADER);

    for (table_name, columns) in groups {
        out.push_str(&format!("  {}: {{\n", table_name));
        for column in columns {
            let ts_type = typemap::column_type(&column.data_type, &column.udt_name);
            let nullable = if column.is_nullable { " | null" } else { "" };
            let optional = if is_auto_generated(column) { "?" } else { "" };
            out.push_str(&format!(
                "    {}{}: ColumnType<{}{}>;\n",
                column.column_name, optional, ts_type, nullable
            ));
        }
        out.push_str("  };\n\n");
    }

    out.push_str(FOOTER);
    out
}

/// The `db-types` command: introspect the catalog and write the type file.
pub fn run(project_dir: &Path) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(generate(project_dir))
}

async fn generate(project_dir: &Path) -> Result<()> {
    let config = DbConfig::from_env()?;
    let pool = introspect::connect(&config).await?;
    let columns = introspect::fetch_columns(&pool).await?;
    pool.close().await;

    let groups = group_by_table(columns);
    let target = project_dir.join(DB_TYPES_FILE);
    write_file(&emit(&groups), &target)?;

    println!("Database types generated at {}.", target.display());
    Ok(())
}
