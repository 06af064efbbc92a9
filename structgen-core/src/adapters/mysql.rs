//! MySQL schema reader.
//!
//! Issues a `SHOW FULL FIELDS` statement and decodes every reported
//! metadata column into a fully-populated descriptor.

use crate::error::{Result, StructgenError, redact_database_url};
use crate::models::ColumnDescriptor;
use sqlx::mysql::{MySqlPoolOptions, MySqlRow};
use sqlx::{MySqlPool, Row};
use std::time::Duration;

/// Reads column metadata over a MySQL connection pool.
#[derive(Debug)]
pub struct MySqlReader {
    pool: MySqlPool,
}

impl MySqlReader {
    /// Opens a connection pool for the given URL.
    ///
    /// The pool is sized for a one-shot batch run: few connections, capped
    /// lifetime, released at process exit.
    ///
    /// # Errors
    /// Fails if the connection cannot be established.
    pub async fn connect(connection_string: &str) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
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

    /// Describes `table` with a `SHOW FULL FIELDS` statement.
    ///
    /// Rows are decoded in the order the server returns them (table column
    /// declaration order). An unknown table surfaces as a query error from
    /// the server; a known table with no columns yields an empty sequence.
    pub async fn describe_table(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        let statement = format!("SHOW FULL FIELDS FROM `{}`", table);
        tracing::debug!("issuing: {}", statement);

        let rows = sqlx::query(&statement)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                StructgenError::query_failed(format!("failed to describe table '{}'", table), e)
            })?;

        let mut columns = Vec::with_capacity(rows.len());
        for row in &rows {
            columns.push(decode_field_row(row, table)?);
        }
        Ok(columns)
    }
}

/// Decodes one `SHOW FULL FIELDS` row into a descriptor.
///
/// Several of these metadata columns are reported with a binary collation,
/// so values are fetched as raw bytes and converted lossily rather than
/// decoded as server-side strings.
fn decode_field_row(row: &MySqlRow, table: &str) -> Result<ColumnDescriptor> {
    Ok(ColumnDescriptor {
        name: required_text(row, "Field", table)?,
        raw_type: required_text(row, "Type", table)?,
        nullable: optional_text(row, "Null"),
        key: optional_text(row, "Key"),
        default_value: optional_text(row, "Default"),
        extra: optional_text(row, "Extra"),
        privileges: optional_text(row, "Privileges"),
        comment: optional_text(row, "Comment"),
    })
}

fn required_text(row: &MySqlRow, column: &str, table: &str) -> Result<String> {
    let bytes: Vec<u8> = row.try_get(column).map_err(|e| {
        StructgenError::query_failed(
            format!("failed to decode '{}' for table '{}'", column, table),
            e,
        )
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn optional_text(row: &MySqlRow, column: &str) -> String {
    row.try_get::<Option<Vec<u8>>, _>(column)
        .ok()
        .flatten()
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default()
}
