//! Catalog introspection for the database type generator.
//!
//! One query against the information-schema views returns a row per
//! (table, column) pair for every base table in the default schema. The
//! ordering clause is what makes the emitted type file deterministic.

use sqlx::{PgPool, Row};

use crate::config::DbConfig;
use crate::error::{Error, Result};

/// Catalog metadata for one (table, column) pair.
#[derive(Debug, Clone)]
pub struct ColumnMeta {
    pub table_name: String,
    pub column_name: String,
    pub data_type: String,
    pub is_nullable: bool,
    pub column_default: Option<String>,
    /// Underlying type name; for array columns this carries the element type
    /// with a leading `_` marker.
    pub udt_name: String,
}

const COLUMNS_QUERY: &str = "\
SELECT
    t.table_name,
    c.column_name,
    c.data_type,
    c.is_nullable,
    c.column_default,
    c.udt_name
FROM
    information_schema.tables t
    JOIN information_schema.columns c ON t.table_name = c.table_name
WHERE
    t.table_schema = 'public'
    AND t.table_type = 'BASE TABLE'
ORDER BY
    t.table_name,
    c.ordinal_position";

/// Opens a connection pool to the catalog's database.
///
/// # Errors
/// * `Error::ConnectionError` if the connection cannot be established;
///   fatal, never retried
pub async fn connect(config: &DbConfig) -> Result<PgPool> {
    PgPool::connect(&config.connection_url()).await.map_err(Error::ConnectionError)
}

/// Fetches column metadata for every base table in the public schema,
/// ordered by table name and ordinal position.
///
/// # Errors
/// * `Error::CatalogError` if the catalog query fails; fatal, never retried
pub async fn fetch_columns(pool: &PgPool) -> Result<Vec<ColumnMeta>> {
    let rows =
        sqlx::query(COLUMNS_QUERY).fetch_all(pool).await.map_err(Error::CatalogError)?;

    Ok(rows
        .into_iter()
        .map(|row| {
            let is_nullable: String = row.get("is_nullable");
            ColumnMeta {
                table_name: row.get("table_name"),
                column_name: row.get("column_name"),
                data_type: row.get("data_type"),
                is_nullable: is_nullable == "YES",
                column_default: row.try_get("column_default").ok(),
                udt_name: row.get("udt_name"),
            }
        })
        .collect())
}
