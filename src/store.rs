//! Persistence seam for validated catalog documents.
//!
//! The catalog never writes a document that has not passed validation; stores
//! only persist, fetch and execute [`QueryDescriptor`]s.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use serde_json::Value;

use crate::error::{CatalogError, Result};
use crate::query::QueryDescriptor;

/// A document store keyed by `(kind, key)`.
pub trait Store {
    /// Insert or replace the document stored under `key`.
    fn upsert(&self, kind: &str, key: &str, doc: &Value) -> Result<()>;

    fn get(&self, kind: &str, key: &str) -> Result<Option<Value>>;

    /// Execute a query and return matching documents in query order.
    fn query(&self, query: &QueryDescriptor) -> Result<Vec<Value>>;
}

/// In-process store holding documents in ordered maps.
#[derive(Debug, Default)]
pub struct MemoryStore {
    kinds: RwLock<HashMap<String, BTreeMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents stored under `kind`.
    pub fn len(&self, kind: &str) -> Result<usize> {
        let kinds = self.kinds.read().map_err(|_| poisoned())?;
        Ok(kinds.get(kind).map_or(0, BTreeMap::len))
    }
}

impl Store for MemoryStore {
    fn upsert(&self, kind: &str, key: &str, doc: &Value) -> Result<()> {
        let mut kinds = self.kinds.write().map_err(|_| poisoned())?;
        kinds
            .entry(kind.to_string())
            .or_default()
            .insert(key.to_string(), doc.clone());
        tracing::info!(kind, key, "stored catalog document");
        Ok(())
    }

    fn get(&self, kind: &str, key: &str) -> Result<Option<Value>> {
        let kinds = self.kinds.read().map_err(|_| poisoned())?;
        Ok(kinds.get(kind).and_then(|docs| docs.get(key)).cloned())
    }

    fn query(&self, query: &QueryDescriptor) -> Result<Vec<Value>> {
        let kinds = self.kinds.read().map_err(|_| poisoned())?;
        let Some(docs) = kinds.get(query.kind) else {
            return Ok(Vec::new());
        };

        let mut matches: Vec<&Value> = docs
            .values()
            .filter(|doc| {
                query
                    .filters
                    .iter()
                    .all(|f| doc.get(f.field) == Some(&f.value))
            })
            .collect();

        // Stable sort: ties keep key order.
        matches.sort_by(|a, b| {
            query
                .order
                .iter()
                .map(|key| compare_values(a.get(key.field), b.get(key.field)))
                .find(|o| *o != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        });

        let offset = query.offset.unwrap_or(0);
        let limit = query.limit.unwrap_or(usize::MAX);
        Ok(matches
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }
}

fn poisoned() -> CatalogError {
    CatalogError::Store("memory store lock poisoned".into())
}

/// Order JSON scalars: absent/null, then booleans, numbers, strings.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    fn rank(v: Option<&Value>) -> u8 {
        match v {
            None | Some(Value::Null) => 0,
            Some(Value::Bool(_)) => 1,
            Some(Value::Number(_)) => 2,
            Some(Value::String(_)) => 3,
            Some(_) => 4,
        }
    }

    match (a, b) {
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}
