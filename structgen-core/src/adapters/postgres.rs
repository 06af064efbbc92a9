//! PostgreSQL schema reader.
//!
//! Joins `pg_class` and `pg_attribute` to recover column names, formatted
//! types and comments for one table.

use crate::error::{Result, StructgenError, redact_database_url};
use crate::models::ColumnDescriptor;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;

/// Statement describing the columns of a named table.
///
/// Positive attribute numbers exclude system columns, and dropped columns
/// are filtered explicitly. `format_type` renders the type the way the
/// server reports it (`character varying(255)`, `timestamp without time
/// zone`, ...), qualifier included.
const DESCRIBE_COLUMNS: &str = r#"
    SELECT
        a.attname AS field,
        format_type(a.atttypid, a.atttypmod) AS data_type,
        col_description(a.attrelid, a.attnum) AS comment
    FROM pg_class c
    JOIN pg_attribute a ON a.attrelid = c.oid
    WHERE c.relname = $1
      AND a.attnum > 0
      AND NOT a.attisdropped
    ORDER BY a.attnum
"#;

/// Reads column metadata over a PostgreSQL connection pool.
#[derive(Debug)]
pub struct PostgresReader {
    pool: PgPool,
}

impl PostgresReader {
    /// Opens a connection pool for the given URL.
    ///
    /// Same one-shot sizing as the MySQL reader: few connections, capped
    /// lifetime, released at process exit.
    ///
    /// # Errors
    /// Fails if the connection cannot be established.
    pub async fn connect(connection_string: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .max_lifetime(Duration::from_secs(300))
            .connect(connection_string)
            .await
            .map_err(|e| {
                StructgenError::connection_failed(
                    format!(
                        "failed to connect to {}",
                        redact_database_url(connection_string)
                    ),
                    e,
                )
            })?;

        Ok(Self { pool })
    }

    /// Describes `table` from the system catalogs.
    ///
    /// Only `name`, `raw_type` and `comment` are populated; the remaining
    /// descriptor fields stay empty because the catalogs queried here do
    /// not report them. Rows come back in ascending attribute number order.
    /// A table that does not exist yields an empty sequence, same as a
    /// table with zero columns.
    pub async fn describe_table(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        tracing::debug!("describing table '{}'", table);

        let rows = sqlx::query(DESCRIBE_COLUMNS)
            .bind(table)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                StructgenError::query_failed(format!("failed to describe table '{}'", table), e)
            })?;

        let mut columns = Vec::with_capacity(rows.len());
        for row in &rows {
            let name: String = row.try_get("field").map_err(|e| {
                StructgenError::query_failed(
                    format!("failed to decode 'field' for table '{}'", table),
                    e,
                )
            })?;
            let raw_type: String = row.try_get("data_type").map_err(|e| {
                StructgenError::query_failed(
                    format!("failed to decode 'data_type' for table '{}'", table),
                    e,
                )
            })?;
            let comment: Option<String> = row.try_get("comment").map_err(|e| {
                StructgenError::query_failed(
                    format!("failed to decode 'comment' for table '{}'", table),
                    e,
                )
            })?;

            columns.push(ColumnDescriptor {
                name,
                raw_type,
                comment: comment.unwrap_or_default(),
                ..ColumnDescriptor::default()
            });
        }
        Ok(columns)
    }
}
