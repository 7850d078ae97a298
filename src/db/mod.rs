pub mod schema;

use anyhow::{Context, Result};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

/// Open an existing database read-write. The file is never created here;
/// callers that accept a missing database must check for it first.
pub fn open_existing(path: impl AsRef<Path>) -> rusqlite::Result<Connection> {
    let path = path.as_ref();
    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_WRITE)?;
    tracing::debug!(path = %path.display(), "opened database");
    Ok(conn)
}

/// Open an existing database read-only, for inspection commands.
pub fn open_readonly(path: impl AsRef<Path>) -> rusqlite::Result<Connection> {
    Connection::open_with_flags(path.as_ref(), OpenFlags::SQLITE_OPEN_READ_ONLY)
}

/// Create (or open) a database at the given path, creating parent
/// directories as needed. Used by `setup` and by test fixtures.
pub fn create_database(path: impl AsRef<Path>) -> Result<Connection> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
    }

    let conn = Connection::open(path)
        .with_context(|| format!("failed to open database at {}", path.display()))?;

    Ok(conn)
}

/// List user-defined tables, lexicographically ordered. Internal
/// `sqlite_*` bookkeeping tables are excluded.
pub fn user_tables(conn: &Connection) -> rusqlite::Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master \
         WHERE type = 'table' AND name NOT LIKE 'sqlite_%' \
         ORDER BY name",
    )?;
    let tables = stmt
        .query_map([], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<String>>>()?;
    Ok(tables)
}

/// Whether a table with the given name exists (internal tables included).
pub fn table_exists(conn: &Connection, table: &str) -> rusqlite::Result<bool> {
    match conn.query_row(
        "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1 LIMIT 1",
        [table],
        |row| row.get::<_, i64>(0),
    ) {
        Ok(_) => Ok(true),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Quote an identifier for interpolation into SQL. Table names come from
/// `sqlite_master`, so this is about odd names, not injection.
pub fn quoted(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}
