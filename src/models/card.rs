use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::sub::{CardFace, Legality, PurchaseLinks, RelatedCard, RelatedLinks};
use crate::error::Result;
use crate::validation::{self, card::validate_card};

// ---------------------------------------------------------------------------
// Card: a validated card printing, keyed by (set_code, collector_number)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    // -- Oracle fields --
    pub name: String,
    pub type_line: String,
    pub mana_cost: String,
    pub converted_mana_cost: f64,
    pub colors: Vec<String>,
    pub color_identity: Vec<String>,
    pub legality: Legality,
    pub is_reserved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oracle_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toughness: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loyalty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub life_modifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hand_modifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_indicator: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_cards: Option<Vec<RelatedCard>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_faces: Option<Vec<CardFace>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edhrec_rank: Option<f64>,

    // -- Printing fields --
    pub is_reprint: bool,
    pub set_code: String,
    pub set_name: String,
    pub collector_number: String,
    pub is_digital: bool,
    pub rarity: String,
    pub artist: String,
    pub frame: String,
    pub is_full_art: bool,
    pub border_color: String,
    pub is_timeshifted: bool,
    pub is_colorshifted: bool,
    pub is_futureshifted: bool,
    pub image_uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiverse_ids: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watermark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_spotlight_number: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_spotlight_uri: Option<String>,

    // -- Market fields --
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usd_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tix_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eur_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_links: Option<RelatedLinks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_links: Option<PurchaseLinks>,
}

impl Card {
    /// Validate an untyped record and convert it into a [`Card`].
    pub fn from_record(record: &Value) -> Result<Self> {
        validate_card(validation::as_record(record, "card")?)?;
        Ok(serde_json::from_value(record.clone())?)
    }

    /// Storage key for the card document: `{set_code}/{collector_number}`.
    pub fn key(&self) -> String {
        card_key(&self.set_code, &self.collector_number)
    }
}

pub fn card_key(set_code: &str, collector_number: &str) -> String {
    format!("{}/{}", set_code, collector_number)
}
