pub mod migrations;
pub mod record_store;

use crate::domain::error::DomainError;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

/// Open (or create) the database at `db_path` and bring the schema up to date.
/// `":memory:"` gives a private in-memory database.
pub fn open_database(db_path: &str) -> Result<Arc<Mutex<Connection>>, DomainError> {
    let conn = Connection::open(db_path).map_err(|e| DomainError::Store(format!("DB error: {e}")))?;
    if db_path != ":memory:" {
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| DomainError::Store(format!("WAL error: {e}")))?;
    }
    migrations::run_migrations(&conn)?;
    Ok(Arc::new(Mutex::new(conn)))
}
