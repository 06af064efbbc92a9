//! Engine-specific schema readers.
//!
//! Each reader owns one sqlx connection pool and answers a single
//! capability: describe the columns of a named table. The engine variant is
//! selected once at startup from the configuration and never changes for
//! the lifetime of the process.

pub mod mysql;
pub mod postgres;

use crate::config::Config;
use crate::error::{Result, StructgenError, redact_database_url};
use crate::models::ColumnDescriptor;

pub use mysql::MySqlReader;
pub use postgres::PostgresReader;

/// Supported database engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    /// MySQL and compatible servers
    MySql,
    /// PostgreSQL
    PostgreSql,
}

impl Engine {
    /// Parses the `database.type` configuration value.
    ///
    /// # Errors
    /// Anything other than `"mysql"` or `"postgresql"` is an unsupported
    /// engine.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "mysql" => Ok(Self::MySql),
            "postgresql" => Ok(Self::PostgreSql),
            other => Err(StructgenError::unsupported_engine(other)),
        }
    }
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MySql => f.write_str("mysql"),
            Self::PostgreSql => f.write_str("postgresql"),
        }
    }
}

/// A connected schema reader for one engine.
#[derive(Debug)]
pub enum SchemaReader {
    /// Connected MySQL reader
    MySql(MySqlReader),
    /// Connected PostgreSQL reader
    PostgreSql(PostgresReader),
}

impl SchemaReader {
    /// Connects the reader variant selected by the configuration.
    ///
    /// # Errors
    /// Fails if the connection string for the selected engine is missing
    /// from the configuration or the connection cannot be opened.
    pub async fn connect(engine: Engine, config: &Config) -> Result<Self> {
        let reader = match engine {
            Engine::MySql => {
                let conn = config
                    .database
                    .mysql_conn
                    .as_deref()
                    .ok_or_else(|| StructgenError::configuration("database.mysqlConn is not set"))?;
                tracing::info!("Target: {}", redact_database_url(conn));
                Self::MySql(MySqlReader::connect(conn).await?)
            }
            Engine::PostgreSql => {
                let conn = config.database.postgresql_conn.as_deref().ok_or_else(|| {
                    StructgenError::configuration("database.postgresqlConn is not set")
                })?;
                tracing::info!("Target: {}", redact_database_url(conn));
                Self::PostgreSql(PostgresReader::connect(conn).await?)
            }
        };
        Ok(reader)
    }

    /// Describes the columns of `table`, in engine row order.
    ///
    /// An empty result is not an error at this layer: a table that does not
    /// exist and a table with zero columns both yield an empty sequence.
    /// Callers needing that distinction must check independently.
    pub async fn describe_table(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        match self {
            Self::MySql(reader) => reader.describe_table(table).await,
            Self::PostgreSql(reader) => reader.describe_table(table).await,
        }
    }

    /// The engine this reader is connected to.
    pub fn engine(&self) -> Engine {
        match self {
            Self::MySql(_) => Engine::MySql,
            Self::PostgreSql(_) => Engine::PostgreSql,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_parse() {
        assert_eq!(Engine::parse("mysql").unwrap(), Engine::MySql);
        assert_eq!(Engine::parse("postgresql").unwrap(), Engine::PostgreSql);

        assert!(matches!(
            Engine::parse("oracle"),
            Err(StructgenError::UnsupportedEngine { .. })
        ));
        assert!(matches!(
            Engine::parse("MySQL"),
            Err(StructgenError::UnsupportedEngine { .. })
        ));
        assert!(matches!(
            Engine::parse(""),
            Err(StructgenError::UnsupportedEngine { .. })
        ));
    }

    #[test]
    fn test_engine_display() {
        assert_eq!(Engine::MySql.to_string(), "mysql");
        assert_eq!(Engine::PostgreSql.to_string(), "postgresql");
    }
}
