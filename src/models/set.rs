use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::validation::{self, set::validate_set};

// ---------------------------------------------------------------------------
// Set: a validated set record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Set {
    pub set_code: String,
    pub set_name: String,
    pub release_date: String,
    pub set_type: String,
    pub card_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_set_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_name: Option<String>,
    pub icon_uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_digital: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_foil: Option<bool>,
}

impl Set {
    /// Validate an untyped record and convert it into a [`Set`].
    pub fn from_record(record: &Value) -> Result<Self> {
        validate_set(validation::as_record(record, "set")?)?;
        Ok(serde_json::from_value(record.clone())?)
    }

    /// Storage key for the set document.
    pub fn key(&self) -> &str {
        &self.set_code
    }
}
