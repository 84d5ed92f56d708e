use rusqlite::{params, Connection};

use crate::error::GraphResult;

/// Store a value, overwriting any existing value for the same key.
pub fn put_value(conn: &Connection, key: &str, value: &str) -> GraphResult<()> {
    conn.execute(
        "INSERT INTO key_values (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = datetime('now')",
        params![key, value],
    )?;
    Ok(())
}

pub fn get_value(conn: &Connection, key: &str) -> GraphResult<Option<String>> {
    let mut stmt = conn.prepare("SELECT value FROM key_values WHERE key = ?1")?;

    let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));

    match result {
        Ok(value) => Ok(Some(value)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
