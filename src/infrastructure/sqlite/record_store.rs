use crate::domain::entities::Entity;
use crate::domain::error::DomainError;
use crate::domain::ports::record_store::*;
use chrono::SecondsFormat;
use rusqlite::types::{ToSql, Value};
use rusqlite::{params, Connection};
use std::marker::PhantomData;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Record store keeping every entity type in one table, one JSON body per row.
/// Ordering and filtering read fields out of the body with `json_extract`.
pub struct SqliteRecordStore<T> {
    conn: Arc<Mutex<Connection>>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> SqliteRecordStore<T> {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self {
            conn,
            _entity: PhantomData,
        }
    }

    fn row_to_record(body: &str) -> Option<T> {
        match serde_json::from_str(body) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(entity = T::NAME, error = %e, "skipping unreadable stored record");
                None
            }
        }
    }

    fn query_bodies(
        conn: &Connection,
        sql: &str,
        param_values: &[Box<dyn ToSql>],
    ) -> Result<Vec<T>, DomainError> {
        let params_refs: Vec<&dyn ToSql> = param_values.iter().map(|p| p.as_ref()).collect();
        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| DomainError::Store(e.to_string()))?;
        let bodies: Vec<String> = stmt
            .query_map(params_refs.as_slice(), |row| row.get::<_, String>(0))
            .map_err(|e| DomainError::Store(e.to_string()))?
            .collect::<Result<_, _>>()
            .map_err(|e| DomainError::Store(e.to_string()))?;
        Ok(bodies.iter().filter_map(|b| Self::row_to_record(b)).collect())
    }
}

fn json_path(field: &str) -> String {
    format!("$.{field}")
}

fn json_to_sql(value: &serde_json::Value) -> Result<Value, DomainError> {
    Ok(match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Integer(*b as i64),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            None => Value::Real(n.as_f64().unwrap_or_default()),
        },
        serde_json::Value::String(s) => Value::Text(s.clone()),
        other => {
            return Err(DomainError::Validation(format!(
                "Filter values must be scalar, got {other}"
            )))
        }
    })
}

impl<T: Entity> RecordStore<T> for SqliteRecordStore<T> {
    fn list(&self, order_by: Option<&OrderBy>, limit: Option<usize>) -> Result<Vec<T>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Store(e.to_string()))?;
        let mut sql = String::from("SELECT body FROM records WHERE entity = ?1");
        let mut param_values: Vec<Box<dyn ToSql>> = vec![Box::new(T::NAME)];

        match order_by {
            Some(order) => {
                validate_field_name(&order.field)?;
                let dir = if order.descending { "DESC" } else { "ASC" };
                if order.field == "created_date" {
                    sql.push_str(&format!(" ORDER BY created_date {dir}, rowid {dir}"));
                } else {
                    sql.push_str(&format!(
                        " ORDER BY json_extract(body, ?{}) {dir}, rowid ASC",
                        param_values.len() + 1
                    ));
                    param_values.push(Box::new(json_path(&order.field)));
                }
            }
            None => sql.push_str(" ORDER BY rowid ASC"),
        }
        if let Some(limit) = limit {
            sql.push_str(&format!(" LIMIT ?{}", param_values.len() + 1));
            param_values.push(Box::new(limit as i64));
        }

        debug!(entity = T::NAME, order = ?order_by.map(|o| o.to_string()), ?limit, "listing records");
        Self::query_bodies(&conn, &sql, &param_values)
    }

    fn create(&self, record: &T) -> Result<T, DomainError> {
        let body = serde_json::to_string(record)
            .map_err(|e| DomainError::Store(format!("Failed to encode {}: {e}", T::NAME)))?;
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Store(e.to_string()))?;
        conn.execute(
            "INSERT INTO records (id, entity, body, created_date) VALUES (?1, ?2, ?3, ?4)",
            params![
                record.id(),
                T::NAME,
                body,
                record.created_date().to_rfc3339_opts(SecondsFormat::Nanos, true)
            ],
        )
        .map_err(|e| DomainError::Store(format!("Failed to add {}: {e}", T::NAME)))?;
        Ok(record.clone())
    }

    fn delete(&self, id: &str) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Store(e.to_string()))?;
        let rows = conn
            .execute(
                "DELETE FROM records WHERE entity = ?1 AND id = ?2",
                params![T::NAME, id],
            )
            .map_err(|e| DomainError::Store(format!("Failed to delete {}: {e}", T::NAME)))?;
        if rows == 0 {
            return Err(DomainError::NotFound(format!("{} not found: {id}", T::NAME)));
        }
        Ok(())
    }

    fn filter(&self, matches: &[FieldMatch]) -> Result<Vec<T>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Store(e.to_string()))?;
        let mut sql = String::from("SELECT body FROM records WHERE entity = ?1");
        let mut param_values: Vec<Box<dyn ToSql>> = vec![Box::new(T::NAME)];

        for m in matches {
            validate_field_name(&m.field)?;
            let path_idx = param_values.len() + 1;
            param_values.push(Box::new(json_path(&m.field)));
            match json_to_sql(&m.value)? {
                Value::Null => {
                    sql.push_str(&format!(" AND json_extract(body, ?{path_idx}) IS NULL"));
                }
                value => {
                    sql.push_str(&format!(
                        " AND json_extract(body, ?{path_idx}) = ?{}",
                        param_values.len() + 1
                    ));
                    param_values.push(Box::new(value));
                }
            }
        }
        sql.push_str(" ORDER BY created_date DESC, rowid DESC");

        Self::query_bodies(&conn, &sql, &param_values)
    }
}
