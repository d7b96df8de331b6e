//! Field contract for card records.
//!
//! Cards carry their set identity (`set_code`, `set_name`, `is_digital`), and
//! those fields are checked by the set contract itself; failures come back
//! prefixed with the card context so the root cause stays visible.

use std::collections::HashSet;

use serde_json::{Map, Value};

use super::enums::{
    BORDER_COLORS, COLORS, FRAMES, LAYOUTS, LOYALTIES, POWERS, RARITIES, TOUGHNESSES, WATERMARKS,
};
use super::{checks, mana, set, FieldCheck};
use crate::error::{Validation, ValidationError};

/// The eleven format flags every legality block must carry.
pub const LEGALITY_FORMATS: &[&str] = &[
    "standard",
    "future",
    "frontier",
    "modern",
    "legacy",
    "pauper",
    "vintage",
    "penny",
    "commander",
    "one_v_one",
    "duel",
];

pub const RELATED_LINK_KEYS: &[&str] = &["gatherer", "tcgplayer_decks", "edhrec", "mtgtop8"];

pub const PURCHASE_LINK_KEYS: &[&str] = &[
    "amazon",
    "ebay",
    "tcgplayer",
    "magiccardmarket",
    "cardhoarder",
    "card_kingdom",
    "mtgo_traders",
    "coolstuffinc",
];

/// Field checks in the order a card record is validated.
pub const CARD_FIELDS: &[(&str, FieldCheck)] = &[
    ("name", validate_name),
    ("type_line", validate_type_line),
    ("mana_cost", validate_mana_cost),
    ("converted_mana_cost", validate_converted_mana_cost),
    ("colors", validate_colors),
    ("color_identity", validate_color_identity),
    ("legality", validate_legality),
    ("is_reserved", validate_is_reserved),
    ("is_reprint", validate_is_reprint),
    ("set_code", validate_set_code),
    ("set_name", validate_set_name),
    ("collector_number", validate_collector_number),
    ("is_digital", validate_is_digital),
    ("rarity", validate_rarity),
    ("artist", validate_artist),
    ("frame", validate_frame),
    ("is_full_art", validate_is_full_art),
    ("border_color", validate_border_color),
    ("is_timeshifted", validate_is_timeshifted),
    ("is_colorshifted", validate_is_colorshifted),
    ("is_futureshifted", validate_is_futureshifted),
    ("image_uri", validate_image_uri),
    ("multiverse_ids", validate_multiverse_ids),
    ("layout", validate_layout),
    ("oracle_text", validate_oracle_text),
    ("flavor_text", validate_flavor_text),
    ("power", validate_power),
    ("toughness", validate_toughness),
    ("loyalty", validate_loyalty),
    ("life_modifier", validate_life_modifier),
    ("hand_modifier", validate_hand_modifier),
    ("color_indicator", validate_color_indicator),
    ("related_cards", validate_related_cards),
    ("card_faces", validate_card_faces),
    ("watermark", validate_watermark),
    ("edhrec_rank", validate_edhrec_rank),
    ("story_spotlight_number", validate_story_spotlight_number),
    ("story_spotlight_uri", validate_story_spotlight_uri),
    ("usd_price", validate_usd_price),
    ("tix_price", validate_tix_price),
    ("eur_price", validate_eur_price),
    ("related_links", validate_related_links),
    ("purchase_links", validate_purchase_links),
];

/// Checks applied to every entry of `card_faces`.
const FACE_FIELDS: &[(&str, FieldCheck)] = &[
    ("name", validate_name),
    ("type_line", validate_type_line),
    ("mana_cost", validate_mana_cost),
    ("oracle_text", validate_oracle_text),
    ("flavor_text", validate_flavor_text),
    ("colors", validate_face_colors),
    ("color_indicator", validate_color_indicator),
    ("power", validate_power),
    ("toughness", validate_toughness),
    ("loyalty", validate_loyalty),
    ("artist", validate_face_artist),
    ("watermark", validate_watermark),
    ("image_uri", validate_face_image_uri),
];

/// Checks applied to every entry of `related_cards`.
const RELATED_CARD_FIELDS: &[(&str, FieldCheck)] = &[
    ("name", validate_name),
    ("set_code", validate_set_code),
    ("collector_number", validate_collector_number),
];

/// Validate a whole card record, stopping at the first violation.
pub fn validate_card(record: &Map<String, Value>) -> Validation {
    super::run_fields(CARD_FIELDS, record)
}

// ---------------------------------------------------------------------------
// Required scalars
// ---------------------------------------------------------------------------

pub fn validate_name(value: Option<&Value>) -> Validation {
    required_text(value, "name")
}

pub fn validate_type_line(value: Option<&Value>) -> Validation {
    required_text(value, "type_line")
}

/// The empty string is the valid "no cost" case.
pub fn validate_mana_cost(value: Option<&Value>) -> Validation {
    mana::validate_mana_cost(checks::required(value, "mana_cost")?, "mana_cost")
}

pub fn validate_converted_mana_cost(value: Option<&Value>) -> Validation {
    checks::non_negative_number(
        checks::required(value, "converted_mana_cost")?,
        "converted_mana_cost",
    )
}

pub fn validate_colors(value: Option<&Value>) -> Validation {
    color_array(checks::required(value, "colors")?, "colors")
}

pub fn validate_color_identity(value: Option<&Value>) -> Validation {
    color_array(checks::required(value, "color_identity")?, "color_identity")
}

pub fn validate_legality(value: Option<&Value>) -> Validation {
    let block = checks::object(checks::required(value, "legality")?, "legality")?;
    for format in LEGALITY_FORMATS {
        let field = format!("legality.{}", format);
        checks::boolean(checks::required(block.get(*format), &field)?, &field)?;
    }
    Ok(())
}

pub fn validate_is_reserved(value: Option<&Value>) -> Validation {
    required_flag(value, "is_reserved")
}

pub fn validate_is_reprint(value: Option<&Value>) -> Validation {
    required_flag(value, "is_reprint")
}

pub fn validate_set_code(value: Option<&Value>) -> Validation {
    set::validate_set_code(value).map_err(|e| e.context("card set_code invalid"))
}

pub fn validate_set_name(value: Option<&Value>) -> Validation {
    set::validate_set_name(value).map_err(|e| e.context("card set_name invalid"))
}

/// Required on a card, then checked by the set's own `is_digital` rule.
pub fn validate_is_digital(value: Option<&Value>) -> Validation {
    checks::required(value, "is_digital")
        .and_then(|v| set::validate_is_digital(Some(v)))
        .map_err(|e| e.context("card is_digital error"))
}

pub fn validate_collector_number(value: Option<&Value>) -> Validation {
    checks::alphanumeric(
        checks::required(value, "collector_number")?,
        "collector_number",
    )
}

pub fn validate_rarity(value: Option<&Value>) -> Validation {
    RARITIES.check(checks::required(value, "rarity")?, "rarity")
}

pub fn validate_artist(value: Option<&Value>) -> Validation {
    required_text(value, "artist")
}

pub fn validate_frame(value: Option<&Value>) -> Validation {
    FRAMES.check(checks::required(value, "frame")?, "frame")
}

pub fn validate_is_full_art(value: Option<&Value>) -> Validation {
    required_flag(value, "is_full_art")
}

pub fn validate_border_color(value: Option<&Value>) -> Validation {
    BORDER_COLORS.check(checks::required(value, "border_color")?, "border_color")
}

pub fn validate_is_timeshifted(value: Option<&Value>) -> Validation {
    required_flag(value, "is_timeshifted")
}

pub fn validate_is_colorshifted(value: Option<&Value>) -> Validation {
    required_flag(value, "is_colorshifted")
}

pub fn validate_is_futureshifted(value: Option<&Value>) -> Validation {
    required_flag(value, "is_futureshifted")
}

pub fn validate_image_uri(value: Option<&Value>) -> Validation {
    checks::uri(checks::required(value, "image_uri")?, "image_uri", Some(".png"))
}

// ---------------------------------------------------------------------------
// Optional scalars
// ---------------------------------------------------------------------------

pub fn validate_multiverse_ids(value: Option<&Value>) -> Validation {
    checks::optional(value, |v| {
        for id in checks::array(v, "multiverse_ids")? {
            checks::non_negative_number(id, "multiverse_ids entry")?;
        }
        Ok(())
    })
}

pub fn validate_layout(value: Option<&Value>) -> Validation {
    checks::optional(value, |v| LAYOUTS.check(v, "layout"))
}

pub fn validate_oracle_text(value: Option<&Value>) -> Validation {
    optional_text(value, "oracle_text")
}

pub fn validate_flavor_text(value: Option<&Value>) -> Validation {
    optional_text(value, "flavor_text")
}

pub fn validate_power(value: Option<&Value>) -> Validation {
    checks::optional(value, |v| POWERS.check(v, "power"))
}

pub fn validate_toughness(value: Option<&Value>) -> Validation {
    checks::optional(value, |v| TOUGHNESSES.check(v, "toughness"))
}

pub fn validate_loyalty(value: Option<&Value>) -> Validation {
    checks::optional(value, |v| LOYALTIES.check(v, "loyalty"))
}

pub fn validate_life_modifier(value: Option<&Value>) -> Validation {
    optional_text(value, "life_modifier")
}

pub fn validate_hand_modifier(value: Option<&Value>) -> Validation {
    optional_text(value, "hand_modifier")
}

pub fn validate_color_indicator(value: Option<&Value>) -> Validation {
    checks::optional(value, |v| color_array(v, "color_indicator"))
}

pub fn validate_watermark(value: Option<&Value>) -> Validation {
    checks::optional(value, |v| WATERMARKS.check(v, "watermark"))
}

pub fn validate_edhrec_rank(value: Option<&Value>) -> Validation {
    checks::optional(value, |v| checks::number(v, "edhrec_rank").map(|_| ()))
}

pub fn validate_story_spotlight_number(value: Option<&Value>) -> Validation {
    checks::optional(value, |v| {
        checks::number(v, "story_spotlight_number").map(|_| ())
    })
}

pub fn validate_story_spotlight_uri(value: Option<&Value>) -> Validation {
    checks::optional(value, |v| checks::uri(v, "story_spotlight_uri", None))
}

pub fn validate_usd_price(value: Option<&Value>) -> Validation {
    checks::optional(value, |v| checks::non_negative_number(v, "usd_price"))
}

pub fn validate_tix_price(value: Option<&Value>) -> Validation {
    checks::optional(value, |v| checks::non_negative_number(v, "tix_price"))
}

pub fn validate_eur_price(value: Option<&Value>) -> Validation {
    checks::optional(value, |v| checks::non_negative_number(v, "eur_price"))
}

// ---------------------------------------------------------------------------
// Nested structures
// ---------------------------------------------------------------------------

pub fn validate_related_cards(value: Option<&Value>) -> Validation {
    nested_array(value, "related_cards", RELATED_CARD_FIELDS)
}

pub fn validate_card_faces(value: Option<&Value>) -> Validation {
    nested_array(value, "card_faces", FACE_FIELDS)
}

pub fn validate_related_links(value: Option<&Value>) -> Validation {
    link_bundle(value, "related_links", RELATED_LINK_KEYS)
}

pub fn validate_purchase_links(value: Option<&Value>) -> Validation {
    link_bundle(value, "purchase_links", PURCHASE_LINK_KEYS)
}

fn validate_face_colors(value: Option<&Value>) -> Validation {
    checks::optional(value, |v| color_array(v, "colors"))
}

fn validate_face_artist(value: Option<&Value>) -> Validation {
    optional_text(value, "artist")
}

fn validate_face_image_uri(value: Option<&Value>) -> Validation {
    checks::optional(value, |v| checks::uri(v, "image_uri", Some(".png")))
}

/// Present nested arrays must be non-empty arrays of objects, each entry
/// passing `fields`.
fn nested_array(value: Option<&Value>, field: &str, fields: &[(&str, FieldCheck)]) -> Validation {
    let Some(value) = value else {
        return Ok(());
    };
    let entries = checks::array(value, field)?;
    if entries.is_empty() {
        return Err(ValidationError::new(format!(
            "{} must not be empty when present",
            field
        )));
    }
    let context = format!("Error in {}", field);
    for entry in entries {
        let record = checks::object(entry, field).map_err(|e| e.context(&context))?;
        super::run_fields(fields, record).map_err(|e| e.context(&context))?;
    }
    Ok(())
}

fn link_bundle(value: Option<&Value>, field: &str, keys: &[&str]) -> Validation {
    let Some(value) = value else {
        return Ok(());
    };
    let links = checks::object(value, field)?;
    for name in links.keys() {
        if !keys.contains(&name.as_str()) {
            return Err(ValidationError::new(format!(
                "{} has unknown link {:?}",
                field, name
            )));
        }
    }
    for key in keys {
        checks::optional(links.get(*key), |v| {
            checks::uri(v, &format!("{}.{}", field, key), None)
        })?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Colors drawn from `W U B R G`, each at most once. The empty array is valid.
fn color_array(value: &Value, field: &str) -> Validation {
    let mut seen = HashSet::new();
    for entry in checks::array(value, field)? {
        let color = checks::non_empty_string(entry, field)?;
        COLORS.check_str(color, field)?;
        if !seen.insert(color) {
            return Err(ValidationError::new(format!(
                "{} contains duplicate color {:?}",
                field, color
            )));
        }
    }
    Ok(())
}

fn required_text(value: Option<&Value>, field: &str) -> Validation {
    checks::non_empty_string(checks::required(value, field)?, field).map(|_| ())
}

fn optional_text(value: Option<&Value>, field: &str) -> Validation {
    checks::optional(value, |v| checks::non_empty_string(v, field).map(|_| ()))
}

fn required_flag(value: Option<&Value>, field: &str) -> Validation {
    checks::boolean(checks::required(value, field)?, field)
}
