//! Tables created at startup when missing

/// Idempotent DDL applied by `common::database::apply_schema`
pub const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS donations (
        id SERIAL PRIMARY KEY,
        food_name VARCHAR(100),
        quantity VARCHAR(50),
        donor VARCHAR(100),
        receiver VARCHAR(100),
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        username TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
];
