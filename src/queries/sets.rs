//! Set validation, storage, and filtered lookup.

use serde_json::{Map, Value};

use crate::config::{SET_DEFAULT_SORT, SET_KIND};
use crate::error::{CatalogError, Result, Validation, ValidationError};
use crate::models::Set;
use crate::query::{build_query, QueryDescriptor};
use crate::store::Store;
use crate::validation::{self, set, FieldCheck};

/// Filterable set fields, in the order filters are applied.
pub const SET_FILTERS: &[(&str, FieldCheck)] = &[
    ("block_code", set::validate_block_code),
    ("block_name", set::validate_block_name),
    ("card_count", set::validate_card_count),
    ("icon_uri", set::validate_icon_uri),
    ("is_digital", set::validate_is_digital),
    ("is_foil", set::validate_is_foil),
    ("parent_set_code", set::validate_parent_set_code),
    ("release_date", set::validate_release_date),
    ("set_code", set::validate_set_code),
    ("set_name", set::validate_set_name),
    ("set_type", set::validate_set_type),
];

/// Build a set query from a sparse filter object.
///
/// ```rust
/// use mtg_catalog::queries::sets::build_set_query;
/// use serde_json::json;
///
/// let filter = json!({ "block_code": "xln" });
/// let query = build_set_query(filter.as_object().unwrap()).unwrap();
/// assert_eq!(query.filters.len(), 1);
/// assert_eq!(query.order[0].field, "block_code");
/// ```
pub fn build_set_query(filter: &Map<String, Value>) -> std::result::Result<QueryDescriptor, ValidationError> {
    build_query(SET_KIND, SET_FILTERS, SET_DEFAULT_SORT, filter)
}

// ---------------------------------------------------------------------------
// SetApi
// ---------------------------------------------------------------------------

/// Set operations bound to a store.
pub struct SetApi<'a, S: Store> {
    store: &'a S,
}

impl<'a, S: Store> SetApi<'a, S> {
    /// Create a new `SetApi` bound to the given store.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Check a set record against the full set contract.
    pub fn validate(&self, record: &Value) -> Validation {
        set::validate_set(validation::as_record(record, "set")?)
    }

    /// Build a query from a filter object without executing it.
    pub fn build_query(&self, filter: &Value) -> std::result::Result<QueryDescriptor, ValidationError> {
        let filter = filter
            .as_object()
            .ok_or_else(|| ValidationError::new("set filter must be an object"))?;
        build_set_query(filter)
    }

    /// Validate a set record and store it under its `set_code`.
    ///
    /// Nothing is written when validation fails.
    pub fn put(&self, record: &Value) -> Result<Set> {
        let set = Set::from_record(record).inspect_err(|e| {
            tracing::debug!(error = %e, "rejected set record");
        })?;
        self.store
            .upsert(SET_KIND, set.key(), &serde_json::to_value(&set)?)?;
        Ok(set)
    }

    /// Get a single set by its code.
    pub fn get(&self, set_code: &str) -> Result<Option<Set>> {
        match self.store.get(SET_KIND, set_code)? {
            Some(doc) => Ok(Some(serde_json::from_value(doc)?)),
            None => Ok(None),
        }
    }

    /// Like [`get`](Self::get) but a missing set is an error.
    pub fn require(&self, set_code: &str) -> Result<Set> {
        self.get(set_code)?
            .ok_or_else(|| CatalogError::NotFound(format!("set {}", set_code)))
    }

    /// Find sets matching a filter object, ordered by the filtered fields.
    pub fn find(&self, filter: &Value) -> Result<Vec<Set>> {
        let query = self.build_query(filter)?;
        self.run(&query)
    }

    /// Execute an already built query.
    pub fn run(&self, query: &QueryDescriptor) -> Result<Vec<Set>> {
        self.store
            .query(query)?
            .into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(CatalogError::from))
            .collect()
    }
}
