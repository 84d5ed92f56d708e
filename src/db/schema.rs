use rusqlite::Connection;

use crate::error::GraphResult;

/// Initialize the database schema. Creates the blob table if it doesn't exist.
pub fn initialize(conn: &Connection) -> GraphResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS key_values (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        ",
    )?;
    Ok(())
}

/// Create an in-memory connection for testing. Available in test builds.
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    conn
}
