//! Mana-cost tokenizer.
//!
//! A cost is zero or more concatenated bracketed symbols, e.g. `{5}{B}{B}`.
//! The empty string is the valid "no cost" case.

use serde_json::Value;

use super::checks;
use super::enums::MANA_SYMBOLS;
use crate::error::{Validation, ValidationError};

/// Split a cost string into candidate symbol tokens.
///
/// The cost is split on `}`, a trailing empty segment is dropped, and every
/// remaining segment is closed with `}` again. An unterminated final symbol
/// (`{W}{U`) is therefore closed, while bare text (`W`) becomes `W}` and
/// fails the symbol lookup.
pub fn mana_tokens(cost: &str) -> Vec<String> {
    let mut segments: Vec<&str> = cost.split('}').collect();
    if segments.last() == Some(&"") {
        segments.pop();
    }
    segments.into_iter().map(|seg| format!("{}}}", seg)).collect()
}

pub fn validate_mana_cost_str(cost: &str, field: &str) -> Validation {
    for token in mana_tokens(cost) {
        if !MANA_SYMBOLS.contains(&token) {
            return Err(ValidationError::new(format!(
                "{} {:?} contains invalid mana symbol {:?}",
                field, cost, token
            )));
        }
    }
    Ok(())
}

/// Require a string (possibly empty) made only of known mana symbols.
pub fn validate_mana_cost(value: &Value, field: &str) -> Validation {
    let cost = checks::string(value, field)?;
    validate_mana_cost_str(cost, field)
}
