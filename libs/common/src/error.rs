//! Error type for the shared database plumbing

use sqlx::Error as SqlxError;
use thiserror::Error;

/// Failures while configuring, connecting to or querying PostgreSQL
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The pool could not reach the database
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// A query failed after the pool was up
    #[error("Database query error: {0}")]
    Query(#[source] SqlxError),

    /// One of the startup `CREATE TABLE IF NOT EXISTS` statements failed;
    /// `index` is its position in the list passed to `apply_schema`
    #[error("Schema bootstrap failed at statement {index}: {source}")]
    SchemaBootstrap {
        index: usize,
        #[source]
        source: SqlxError,
    },

    /// Missing or unparsable connection settings
    #[error("Database configuration error: {0}")]
    Configuration(String),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
