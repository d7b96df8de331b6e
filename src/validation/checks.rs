//! Primitive field checks shared by the entity validators.
//!
//! Every check receives the field name so its error can say which field broke
//! the contract. Presence is handled separately from shape: [`required`] turns
//! an absent value into an error, [`optional`] turns it into a no-op, and the
//! shape checks only ever see a value that is present.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use url::Url;

use crate::error::{Validation, ValidationError};

static ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("alphanumeric pattern is valid"));

static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern is valid"));

// ---------------------------------------------------------------------------
// Presence
// ---------------------------------------------------------------------------

/// Fail when a required field is absent, otherwise hand back the value.
pub fn required<'a>(value: Option<&'a Value>, field: &str) -> Result<&'a Value, ValidationError> {
    value.ok_or_else(|| ValidationError::new(format!("{} is required", field)))
}

/// Run `check` only when the field is present.
pub fn optional<F>(value: Option<&Value>, check: F) -> Validation
where
    F: FnOnce(&Value) -> Validation,
{
    match value {
        Some(v) => check(v),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Shape
// ---------------------------------------------------------------------------

/// Any string, including the empty string.
pub fn string<'a>(value: &'a Value, field: &str) -> Result<&'a str, ValidationError> {
    value
        .as_str()
        .ok_or_else(|| ValidationError::new(format!("{} must be a string, got {}", field, value)))
}

pub fn non_empty_string<'a>(value: &'a Value, field: &str) -> Result<&'a str, ValidationError> {
    let s = string(value, field)?;
    if s.is_empty() {
        return Err(ValidationError::new(format!("{} must not be empty", field)));
    }
    Ok(s)
}

pub fn boolean(value: &Value, field: &str) -> Validation {
    if value.is_boolean() {
        Ok(())
    } else {
        Err(ValidationError::new(format!("{} must be a boolean, got {}", field, value)))
    }
}

pub fn number(value: &Value, field: &str) -> Result<f64, ValidationError> {
    value
        .as_f64()
        .filter(|n| n.is_finite())
        .ok_or_else(|| ValidationError::new(format!("{} must be a number, got {}", field, value)))
}

pub fn non_negative_number(value: &Value, field: &str) -> Validation {
    let n = number(value, field)?;
    if n < 0.0 {
        return Err(ValidationError::new(format!("{} must not be negative, got {}", field, value)));
    }
    Ok(())
}

pub fn non_negative_integer(value: &Value, field: &str) -> Validation {
    non_negative_number(value, field)?;
    if value.as_u64().is_none() {
        return Err(ValidationError::new(format!("{} must be an integer, got {}", field, value)));
    }
    Ok(())
}

/// Non-empty string of ASCII digits and Latin letters.
pub fn alphanumeric(value: &Value, field: &str) -> Validation {
    let s = non_empty_string(value, field)?;
    if !ALPHANUMERIC.is_match(s) {
        return Err(ValidationError::new(format!("{} must be alphanumeric, got {:?}", field, s)));
    }
    Ok(())
}

/// Calendar date in `YYYY-MM-DD` form that names a real day.
pub fn date(value: &Value, field: &str) -> Validation {
    let s = non_empty_string(value, field)?;
    if !DATE_SHAPE.is_match(s) || NaiveDate::parse_from_str(s, "%Y-%m-%d").is_err() {
        return Err(ValidationError::new(format!(
            "{} must be a YYYY-MM-DD date, got {:?}",
            field, s
        )));
    }
    Ok(())
}

/// Absolute URL, optionally required to end in `suffix` (e.g. `.png`).
///
/// The suffix is matched against the URL path so a query string does not
/// hide the extension.
pub fn uri(value: &Value, field: &str, suffix: Option<&str>) -> Validation {
    let s = non_empty_string(value, field)?;
    let parsed = Url::parse(s)
        .map_err(|e| ValidationError::new(format!("{} is not a valid URL ({}): {:?}", field, e, s)))?;
    if parsed.cannot_be_a_base() || !parsed.has_host() {
        return Err(ValidationError::new(format!("{} must be an absolute URL, got {:?}", field, s)));
    }
    if let Some(ext) = suffix {
        if !parsed.path().ends_with(ext) {
            return Err(ValidationError::new(format!("{} must end in {}, got {:?}", field, ext, s)));
        }
    }
    Ok(())
}

pub fn array<'a>(value: &'a Value, field: &str) -> Result<&'a Vec<Value>, ValidationError> {
    value
        .as_array()
        .ok_or_else(|| ValidationError::new(format!("{} must be an array, got {}", field, value)))
}

pub fn object<'a>(
    value: &'a Value,
    field: &str,
) -> Result<&'a serde_json::Map<String, Value>, ValidationError> {
    value
        .as_object()
        .ok_or_else(|| ValidationError::new(format!("{} must be an object, got {}", field, value)))
}
