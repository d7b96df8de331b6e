use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Legality
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Legality {
    pub standard: bool,
    pub future: bool,
    pub frontier: bool,
    pub modern: bool,
    pub legacy: bool,
    pub pauper: bool,
    pub vintage: bool,
    pub penny: bool,
    pub commander: bool,
    pub one_v_one: bool,
    pub duel: bool,
}

// ---------------------------------------------------------------------------
// RelatedLinks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RelatedLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gatherer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcgplayer_decks: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edhrec: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtgtop8: Option<String>,
}

// ---------------------------------------------------------------------------
// PurchaseLinks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PurchaseLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amazon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ebay: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcgplayer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magiccardmarket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cardhoarder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_kingdom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtgo_traders: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coolstuffinc: Option<String>,
}

// ---------------------------------------------------------------------------
// RelatedCard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedCard {
    pub name: String,
    pub set_code: String,
    pub collector_number: String,
}

// ---------------------------------------------------------------------------
// CardFace
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardFace {
    pub name: String,
    pub type_line: String,
    pub mana_cost: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oracle_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_indicator: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toughness: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loyalty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watermark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
}
