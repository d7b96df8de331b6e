//! Record validation and query construction for an MTG set and card catalog.
//!
//! Every inbound set or card record is checked against a closed contract
//! (required fields, enumerated domains, string formats, nested structures)
//! before it may reach a [`Store`]. Sparse filter objects are turned into
//! equality-filtered, ordered [`QueryDescriptor`]s that a store executes.
//!
//! # Quick start
//!
//! ```rust
//! use mtg_catalog::Catalog;
//! use serde_json::json;
//!
//! let catalog = Catalog::in_memory();
//!
//! catalog.sets().put(&json!({
//!     "set_code": "XLN",
//!     "set_name": "Ixalan",
//!     "release_date": "2017-09-29",
//!     "set_type": "expansion",
//!     "card_count": 289,
//!     "block_code": "xln",
//!     "block_name": "Ixalan",
//!     "icon_uri": "https://img.example.com/sets/xln.svg"
//! })).unwrap();
//!
//! let sets = catalog.sets().find(&json!({ "block_code": "xln" })).unwrap();
//! assert_eq!(sets[0].set_name, "Ixalan");
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
#[cfg(feature = "duckdb")]
pub mod connection;
pub mod error;
pub mod models;
pub mod queries;
pub mod query;
pub mod sql_builder;
pub mod store;
pub mod validation;

#[cfg(feature = "async")]
pub use async_client::AsyncCatalog;
#[cfg(feature = "duckdb")]
pub use connection::DuckDbStore;
pub use error::{CatalogError, Result, Validation, ValidationError};
pub use query::{QueryDescriptor, SortKey};
pub use sql_builder::SqlBuilder;
pub use store::{MemoryStore, Store};

use std::fmt;
#[cfg(feature = "duckdb")]
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// CatalogBuilder
// ---------------------------------------------------------------------------

/// Builder for a DuckDB-backed [`Catalog`].
///
/// Use [`Catalog::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](CatalogBuilder::build) to open the database.
#[cfg(feature = "duckdb")]
#[derive(Default)]
pub struct CatalogBuilder {
    database_path: Option<PathBuf>,
    in_memory: bool,
}

#[cfg(feature = "duckdb")]
impl CatalogBuilder {
    /// Set a custom database file.
    ///
    /// If not set, the platform-appropriate data directory is used
    /// (see [`config::default_database_path`]).
    pub fn database_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.database_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Keep the catalog in memory instead of on disk. Defaults to `false`.
    pub fn in_memory(mut self, in_memory: bool) -> Self {
        self.in_memory = in_memory;
        self
    }

    /// Open the database and create the document tables if needed.
    pub fn build(self) -> Result<Catalog<DuckDbStore>> {
        let store = if self.in_memory {
            DuckDbStore::open_in_memory()?
        } else {
            let path = self
                .database_path
                .unwrap_or_else(config::default_database_path);
            tracing::info!(path = %path.display(), "opening catalog database");
            DuckDbStore::open(path)?
        };
        Ok(Catalog::new(store))
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// The main entry point: a store plus per-entity operation wrappers.
///
/// The API accessors are lightweight borrowing wrappers and hold no
/// validation state of their own.
pub struct Catalog<S: Store> {
    store: S,
}

impl Catalog<MemoryStore> {
    /// Create a catalog backed by a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }
}

#[cfg(feature = "duckdb")]
impl Catalog<DuckDbStore> {
    /// Create a new builder for a DuckDB-backed catalog.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }
}

impl<S: Store> Catalog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the set operations.
    pub fn sets(&self) -> queries::sets::SetApi<'_, S> {
        queries::sets::SetApi::new(&self.store)
    }

    /// Access the card operations.
    pub fn cards(&self) -> queries::cards::CardApi<'_, S> {
        queries::cards::CardApi::new(&self.store)
    }

    /// Return a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the catalog and hand back its store.
    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S: Store> fmt::Debug for Catalog<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Catalog<{}>", std::any::type_name::<S>())
    }
}
