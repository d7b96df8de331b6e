//! Async wrapper around [`Catalog`] for use in async runtimes (Tokio, etc.).
//!
//! Validation is synchronous and cheap, but stores may block on I/O, so every
//! operation runs on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//!
//! # Example
//!
//! ```no_run
//! use mtg_catalog::{AsyncCatalog, Catalog};
//! use serde_json::json;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let catalog = AsyncCatalog::new(Catalog::in_memory());
//!
//!     let sets = catalog
//!         .run(|c| c.sets().find(&json!({ "set_type": "expansion" })))
//!         .await
//!         .unwrap();
//! }
//! ```

use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::error::{CatalogError, Result};
use crate::models::{Card, Set};
use crate::store::Store;
use crate::Catalog;

/// Async wrapper around [`Catalog`].
///
/// The catalog is protected by a [`Mutex`] so stores that are not `Sync`
/// (such as a DuckDB connection) can be shared across tasks.
pub struct AsyncCatalog<S: Store> {
    inner: Arc<Mutex<Catalog<S>>>,
}

impl<S: Store> Clone for AsyncCatalog<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S> AsyncCatalog<S>
where
    S: Store + Send + 'static,
{
    pub fn new(catalog: Catalog<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(catalog)),
        }
    }

    /// Run a sync catalog operation on the blocking thread pool.
    ///
    /// The closure receives an `&Catalog` reference and should return
    /// a `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Catalog<S>) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let catalog = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = catalog
                .lock()
                .map_err(|_| CatalogError::Store("catalog lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| CatalogError::Store(format!("Task join error: {e}")))?
    }

    /// Validate and store a set record.
    pub async fn put_set(&self, record: Value) -> Result<Set> {
        self.run(move |c| c.sets().put(&record)).await
    }

    /// Validate and store a card record.
    pub async fn put_card(&self, record: Value) -> Result<Card> {
        self.run(move |c| c.cards().put(&record)).await
    }

    pub async fn find_sets(&self, filter: Value) -> Result<Vec<Set>> {
        self.run(move |c| c.sets().find(&filter)).await
    }

    pub async fn find_cards(&self, filter: Value) -> Result<Vec<Card>> {
        self.run(move |c| c.cards().find(&filter)).await
    }
}
