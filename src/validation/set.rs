//! Field contract for set records.
//!
//! The single-field validators are public because card records delegate their
//! set-identity fields to them.

use serde_json::{Map, Value};

use super::checks;
use super::enums::SET_TYPES;
use super::FieldCheck;
use crate::error::Validation;

/// Field checks in the order a set record is validated.
pub const SET_FIELDS: &[(&str, FieldCheck)] = &[
    ("set_code", validate_set_code),
    ("set_name", validate_set_name),
    ("release_date", validate_release_date),
    ("set_type", validate_set_type),
    ("card_count", validate_card_count),
    ("parent_set_code", validate_parent_set_code),
    ("block_code", validate_block_code),
    ("block_name", validate_block_name),
    ("icon_uri", validate_icon_uri),
    ("is_digital", validate_is_digital),
    ("is_foil", validate_is_foil),
];

/// Validate a whole set record, stopping at the first violation.
pub fn validate_set(record: &Map<String, Value>) -> Validation {
    super::run_fields(SET_FIELDS, record)
}

pub fn validate_set_code(value: Option<&Value>) -> Validation {
    checks::alphanumeric(checks::required(value, "set_code")?, "set_code")
}

pub fn validate_set_name(value: Option<&Value>) -> Validation {
    checks::non_empty_string(checks::required(value, "set_name")?, "set_name").map(|_| ())
}

pub fn validate_release_date(value: Option<&Value>) -> Validation {
    checks::date(checks::required(value, "release_date")?, "release_date")
}

pub fn validate_set_type(value: Option<&Value>) -> Validation {
    SET_TYPES.check(checks::required(value, "set_type")?, "set_type")
}

pub fn validate_card_count(value: Option<&Value>) -> Validation {
    checks::non_negative_integer(checks::required(value, "card_count")?, "card_count")
}

pub fn validate_parent_set_code(value: Option<&Value>) -> Validation {
    checks::optional(value, |v| checks::alphanumeric(v, "parent_set_code"))
}

pub fn validate_block_code(value: Option<&Value>) -> Validation {
    checks::optional(value, |v| checks::alphanumeric(v, "block_code"))
}

pub fn validate_block_name(value: Option<&Value>) -> Validation {
    checks::optional(value, |v| checks::non_empty_string(v, "block_name").map(|_| ()))
}

pub fn validate_icon_uri(value: Option<&Value>) -> Validation {
    checks::uri(checks::required(value, "icon_uri")?, "icon_uri", Some(".svg"))
}

pub fn validate_is_digital(value: Option<&Value>) -> Validation {
    checks::optional(value, |v| checks::boolean(v, "is_digital"))
}

pub fn validate_is_foil(value: Option<&Value>) -> Validation {
    checks::optional(value, |v| checks::boolean(v, "is_foil"))
}
