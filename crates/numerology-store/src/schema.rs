use rusqlite::{Connection, OptionalExtension};

use crate::error::{Result, StoreError};

pub const SCHEMA_VERSION: i64 = 1;

pub fn initialize(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA journal_mode = WAL;")?;
    conn.pragma_update(None, "busy_timeout", 5000)?;

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS metadata (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        ",
    )?;

    let version: Option<String> = conn
        .query_row(
            "SELECT value FROM metadata WHERE key = 'schema_version'",
            [],
            |row| row.get(0),
        )
        .optional()?;

    match version.as_deref().map(str::parse::<i64>) {
        None => {
            conn.execute(
                "INSERT INTO metadata (key, value) VALUES ('schema_version', ?1)",
                [SCHEMA_VERSION.to_string()],
            )?;
            tracing::debug!("initialized profile schema v{SCHEMA_VERSION}");
        }
        Some(Ok(v)) if v <= SCHEMA_VERSION => {}
        Some(Ok(v)) => {
            return Err(StoreError::InvalidData(format!(
                "schema version {v} is newer than supported {SCHEMA_VERSION}"
            )));
        }
        Some(Err(_)) => {
            return Err(StoreError::InvalidData(
                "unparseable schema_version".to_string(),
            ));
        }
    }

    Ok(())
}
