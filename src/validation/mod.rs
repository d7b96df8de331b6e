//! Record validation for catalog entities.
//!
//! Validators are stateless and fail fast: each record is checked field by
//! field in a fixed order and the first violated rule is returned. Nothing is
//! corrected or accumulated.
//!
//! # Example
//!
//! ```rust
//! use mtg_catalog::validation::{card, set};
//! use serde_json::json;
//!
//! assert!(card::validate_collector_number(Some(&json!("5a"))).is_ok());
//! assert!(set::validate_set_type(Some(&json!("not-a-type"))).is_err());
//! ```

pub mod card;
pub mod checks;
pub mod enums;
pub mod mana;
pub mod set;

pub use card::validate_card;
pub use mana::{mana_tokens, validate_mana_cost};
pub use set::validate_set;

use serde_json::{Map, Value};

use crate::error::{Validation, ValidationError};

/// A single-field validator. `None` means the field is absent from the record.
pub type FieldCheck = fn(Option<&Value>) -> Validation;

/// Run `fields` against `record` in order, stopping at the first failure.
pub(crate) fn run_fields(fields: &[(&str, FieldCheck)], record: &Map<String, Value>) -> Validation {
    fields
        .iter()
        .try_for_each(|(name, check)| check(record.get(*name)))
}

/// Require an inbound record to be a JSON object.
pub fn as_record<'a>(value: &'a Value, entity: &str) -> Result<&'a Map<String, Value>, ValidationError> {
    value
        .as_object()
        .ok_or_else(|| ValidationError::new(format!("{} record must be an object", entity)))
}
