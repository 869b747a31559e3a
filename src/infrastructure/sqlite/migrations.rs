use crate::domain::error::DomainError;
use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<(), DomainError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS records (
            id TEXT NOT NULL,
            entity TEXT NOT NULL,
            body TEXT NOT NULL,
            created_date TEXT NOT NULL,
            PRIMARY KEY (entity, id)
        );

        CREATE INDEX IF NOT EXISTS idx_records_entity_created ON records(entity, created_date);
        "
    ).map_err(|e| DomainError::Store(format!("Migration failed: {e}")))
}
