//! Mapping from storage column types to TypeScript value types.

/// Maps a catalog storage type name to its TypeScript type.
/// Total: any unmapped type name resolves to `unknown`.
pub fn target_type(storage_type: &str) -> &'static str {
    match storage_type {
        "integer" | "bigint" | "numeric" | "decimal" | "real" | "double precision"
        | "smallint" => "number",
        "text" | "character varying" | "varchar" | "char" => "string",
        "boolean" => "boolean",
        "timestamp" | "timestamp with time zone" | "timestamp without time zone"
        | "date" => "Date",
        "time" => "string",
        "json" | "jsonb" => "unknown",
        "uuid" => "string",
        _ => "unknown",
    }
}

/// Resolves the TypeScript type of a column. Array columns resolve their
/// element type from the underlying type name (leading `_` marker stripped)
/// and are emitted as sequences.
pub fn column_type(data_type: &str, udt_name: &str) -> String {
    if data_type == "ARRAY" {
        let element = udt_name.strip_prefix('_').unwrap_or(udt_name);
        format!("{}[]", target_type(element))
    } else {
        target_type(data_type).to_string()
    }
}
