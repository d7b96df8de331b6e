//! Card validation, storage, and filtered lookup.

use serde_json::{Map, Value};

use crate::config::{CARD_DEFAULT_SORT, CARD_KIND};
use crate::error::{CatalogError, Result, Validation, ValidationError};
use crate::models::{card_key, Card};
use crate::query::{build_query, QueryDescriptor};
use crate::store::Store;
use crate::validation::{self, card, FieldCheck};

/// Filterable card fields, in the order filters are applied.
pub const CARD_FILTERS: &[(&str, FieldCheck)] = &[
    ("artist", card::validate_artist),
    ("border_color", card::validate_border_color),
    ("collector_number", card::validate_collector_number),
    ("frame", card::validate_frame),
    ("is_digital", card::validate_is_digital),
    ("is_reprint", card::validate_is_reprint),
    ("is_reserved", card::validate_is_reserved),
    ("layout", card::validate_layout),
    ("name", card::validate_name),
    ("rarity", card::validate_rarity),
    ("set_code", card::validate_set_code),
    ("set_name", card::validate_set_name),
    ("watermark", card::validate_watermark),
];

/// Build a card query from a sparse filter object.
pub fn build_card_query(filter: &Map<String, Value>) -> std::result::Result<QueryDescriptor, ValidationError> {
    build_query(CARD_KIND, CARD_FILTERS, CARD_DEFAULT_SORT, filter)
}

// ---------------------------------------------------------------------------
// CardApi
// ---------------------------------------------------------------------------

/// Card operations bound to a store.
pub struct CardApi<'a, S: Store> {
    store: &'a S,
}

impl<'a, S: Store> CardApi<'a, S> {
    /// Create a new `CardApi` bound to the given store.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Check a card record against the full card contract.
    pub fn validate(&self, record: &Value) -> Validation {
        card::validate_card(validation::as_record(record, "card")?)
    }

    /// Build a query from a filter object without executing it.
    pub fn build_query(&self, filter: &Value) -> std::result::Result<QueryDescriptor, ValidationError> {
        let filter = filter
            .as_object()
            .ok_or_else(|| ValidationError::new("card filter must be an object"))?;
        build_card_query(filter)
    }

    /// Validate a card record and store it under `{set_code}/{collector_number}`.
    ///
    /// Nothing is written when validation fails.
    pub fn put(&self, record: &Value) -> Result<Card> {
        let card = Card::from_record(record).inspect_err(|e| {
            tracing::debug!(error = %e, "rejected card record");
        })?;
        self.store
            .upsert(CARD_KIND, &card.key(), &serde_json::to_value(&card)?)?;
        Ok(card)
    }

    /// Get a single printing by set code and collector number.
    pub fn get(&self, set_code: &str, collector_number: &str) -> Result<Option<Card>> {
        match self.store.get(CARD_KIND, &card_key(set_code, collector_number))? {
            Some(doc) => Ok(Some(serde_json::from_value(doc)?)),
            None => Ok(None),
        }
    }

    /// Like [`get`](Self::get) but a missing card is an error.
    pub fn require(&self, set_code: &str, collector_number: &str) -> Result<Card> {
        self.get(set_code, collector_number)?.ok_or_else(|| {
            CatalogError::NotFound(format!("card {}", card_key(set_code, collector_number)))
        })
    }

    /// Find cards matching a filter object, ordered by the filtered fields.
    pub fn find(&self, filter: &Value) -> Result<Vec<Card>> {
        let query = self.build_query(filter)?;
        self.run(&query)
    }

    /// Execute an already built query.
    pub fn run(&self, query: &QueryDescriptor) -> Result<Vec<Card>> {
        self.store
            .query(query)?
            .into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(CatalogError::from))
            .collect()
    }
}
