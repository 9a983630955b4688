use std::str::FromStr;

use serde_json::{Map, Value, json};
use sqlx::{
    Column, Row, Sqlite, SqlitePool, TypeInfo, ValueRef,
    query::Query,
    sqlite::{SqliteArguments, SqliteConnectOptions, SqlitePoolOptions, SqliteRow},
};
use tracing::debug;

use crate::query::{SelectQuery, SqlValue};

/// One table row, keyed by column name in result order.
pub type Record = Map<String, Value>;

/// Handle to the relational store, cloned into every request.
#[derive(Clone, Debug)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Opens the database at `database_url`. The file must already exist.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    pub async fn fetch_all(&self, query: &SelectQuery) -> Result<Vec<Record>, sqlx::Error> {
        let statement = query.build();
        debug!(sql = %statement.sql, args = ?statement.args, "fetch_all");

        bind_all(&statement.sql, &statement.args)
            .fetch_all(&self.pool)
            .await?
            .iter()
            .map(decode_row)
            .collect()
    }

    /// First matching row, if any.
    pub async fn fetch_optional(
        &self,
        query: &SelectQuery,
    ) -> Result<Option<Record>, sqlx::Error> {
        let statement = query.build();
        debug!(sql = %statement.sql, args = ?statement.args, "fetch_optional");

        bind_all(&statement.sql, &statement.args)
            .fetch_optional(&self.pool)
            .await?
            .as_ref()
            .map(decode_row)
            .transpose()
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn bind_all<'q>(sql: &'q str, args: &'q [SqlValue]) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    args.iter()
        .fold(sqlx::query(sql), |query, arg| match arg {
            SqlValue::Null => query.bind(None::<String>),
            SqlValue::Integer(n) => query.bind(*n),
            SqlValue::Text(s) => query.bind(s.as_str()),
        })
}

/// Maps a row onto a JSON object by storage class, column by column.
///
/// TEXT is decoded lossily so a stray invalid byte never fails the row. BLOB
/// becomes `{"type": "Buffer", "data": [..]}`.
pub fn decode_row(row: &SqliteRow) -> Result<Record, sqlx::Error> {
    let mut record = Record::with_capacity(row.len());

    for column in row.columns() {
        let index = column.ordinal();
        let raw = row.try_get_raw(index)?;

        let value = if raw.is_null() {
            Value::Null
        } else {
            match raw.type_info().name() {
                "INTEGER" => Value::from(row.try_get::<i64, _>(index)?),
                "REAL" => Value::from(row.try_get::<f64, _>(index)?),
                "BLOB" => json!({
                    "type": "Buffer",
                    "data": row.try_get::<Vec<u8>, _>(index)?,
                }),
                _ => {
                    let bytes = row.try_get::<Vec<u8>, _>(index)?;
                    Value::from(String::from_utf8_lossy(&bytes).into_owned())
                }
            }
        };

        record.insert(column.name().to_string(), value);
    }

    Ok(record)
}

#[cfg(test)]
pub(crate) async fn memory_store(setup: &str) -> Store {
    let store = Store::connect("sqlite::memory:").await.unwrap();
    sqlx::raw_sql(setup).execute(store.pool()).await.unwrap();
    store
}
