//! DuckDB-backed document store.
//!
//! Each storage kind maps to a table of `(key VARCHAR PRIMARY KEY, doc VARCHAR)`
//! rows where `doc` holds the validated record as JSON text. Queries are
//! rendered by [`QueryDescriptor::to_sql`] and filter on extracted JSON fields.

use std::path::Path;

use duckdb::{types::ValueRef, Connection as DuckDbConnection};
use serde_json::Value;

use crate::config;
use crate::error::{CatalogError, Result};
use crate::query::QueryDescriptor;
use crate::store::Store;

/// Wraps a DuckDB connection holding the catalog document tables.
pub struct DuckDbStore {
    conn: DuckDbConnection,
}

impl DuckDbStore {
    /// Open an in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(DuckDbConnection::open_in_memory()?)
    }

    /// Open (or create) a database file, creating parent directories first.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CatalogError::Store(format!("cannot create {}: {}", parent.display(), e)))?;
        }
        Self::init(DuckDbConnection::open(path)?)
    }

    fn init(conn: DuckDbConnection) -> Result<Self> {
        for kind in [config::SET_KIND, config::CARD_KIND] {
            let table = table(kind)?;
            conn.execute_batch(&format!(
                "CREATE TABLE IF NOT EXISTS {} (key VARCHAR PRIMARY KEY, doc VARCHAR NOT NULL)",
                table
            ))?;
        }
        Ok(Self { conn })
    }

    /// Execute SQL whose single column is a JSON document, parsing each row.
    fn execute_docs(&self, sql: &str, params: &[String]) -> Result<Vec<Value>> {
        let mut stmt = self.conn.prepare(sql)?;

        let param_values: Vec<&dyn duckdb::ToSql> = params
            .iter()
            .map(|p| p as &dyn duckdb::ToSql)
            .collect();

        let mut rows = stmt.query(param_values.as_slice())?;
        let mut out = Vec::new();

        while let Some(row) = rows.next()? {
            match row.get_ref(0)? {
                ValueRef::Text(bytes) => out.push(serde_json::from_slice(bytes)?),
                ValueRef::Null => out.push(Value::Null),
                _ => {
                    return Err(CatalogError::Store(
                        "document column is not text".to_string(),
                    ))
                }
            }
        }

        Ok(out)
    }

    /// Access the underlying DuckDB connection for advanced usage.
    pub fn raw(&self) -> &DuckDbConnection {
        &self.conn
    }
}

impl Store for DuckDbStore {
    fn upsert(&self, kind: &str, key: &str, doc: &Value) -> Result<()> {
        let text = serde_json::to_string(doc)?;
        self.conn.execute(
            &format!("INSERT OR REPLACE INTO {} (key, doc) VALUES (?, ?)", table(kind)?),
            duckdb::params![key, text],
        )?;
        tracing::info!(kind, key, "stored catalog document");
        Ok(())
    }

    fn get(&self, kind: &str, key: &str) -> Result<Option<Value>> {
        let sql = format!("SELECT doc FROM {} WHERE key = ?", table(kind)?);
        let docs = self.execute_docs(&sql, &[key.to_string()])?;
        Ok(docs.into_iter().next())
    }

    fn query(&self, query: &QueryDescriptor) -> Result<Vec<Value>> {
        let (sql, params) = query.to_sql()?;
        self.execute_docs(&sql, &params)
    }
}

fn table(kind: &str) -> Result<&'static str> {
    config::table_for_kind(kind)
        .ok_or_else(|| CatalogError::InvalidArgument(format!("unknown storage kind {:?}", kind)))
}
