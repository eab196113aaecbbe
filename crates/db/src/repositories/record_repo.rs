//! Repository for the externally ingested records table.
//!
//! The table's columns are not known at compile time, so rows are read
//! generically and converted column by column into JSON objects.

use serde_json::Value;
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, TypeInfo, ValueRef};

use crate::models::record::Record;
use crate::DbPool;

/// Read-only access to the records table.
pub struct RecordRepo;

impl RecordRepo {
    /// List one page of rows in insertion (rowid) order.
    ///
    /// `table` must already be validated with
    /// [`dcx_core::records::validate_table_name`]; it is interpolated as a
    /// quoted identifier.
    pub async fn list(
        pool: &DbPool,
        table: &str,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Record>, sqlx::Error> {
        let query = format!("SELECT * FROM \"{table}\" ORDER BY rowid LIMIT ?1 OFFSET ?2");
        let rows = sqlx::query(&query)
            .bind(limit)
            .bind(skip)
            .fetch_all(pool)
            .await?;
        rows.iter().map(row_to_record).collect()
    }
}

/// Convert a row using each value's storage class.
fn row_to_record(row: &SqliteRow) -> Result<Record, sqlx::Error> {
    let mut record = Record::new();
    for column in row.columns() {
        let index = column.ordinal();
        let raw = row.try_get_raw(index)?;
        let value = if raw.is_null() {
            Value::Null
        } else {
            match raw.type_info().name() {
                "INTEGER" => Value::from(row.try_get::<i64, _>(index)?),
                "REAL" => Value::from(row.try_get::<f64, _>(index)?),
                "BLOB" => Value::from(row.try_get::<Vec<u8>, _>(index)?),
                _ => Value::from(row.try_get::<String, _>(index)?),
            }
        };
        record.insert(column.name().to_string(), value);
    }
    Ok(record)
}
