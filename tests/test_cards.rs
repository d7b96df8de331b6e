//! Card contract and card API tests.

mod common;

use common::{legions_landing, lightning_bolt, with, without};
use mtg_catalog::validation::card;
use mtg_catalog::validation::set;
use mtg_catalog::{Catalog, CatalogError};
use serde_json::{json, Value};

fn validate(record: &Value) -> mtg_catalog::Validation {
    Catalog::in_memory().cards().validate(record)
}

const REQUIRED: &[&str] = &[
    "name",
    "type_line",
    "mana_cost",
    "converted_mana_cost",
    "colors",
    "color_identity",
    "legality",
    "is_reserved",
    "is_reprint",
    "set_code",
    "set_name",
    "collector_number",
    "is_digital",
    "rarity",
    "artist",
    "frame",
    "is_full_art",
    "border_color",
    "is_timeshifted",
    "is_colorshifted",
    "is_futureshifted",
    "image_uri",
];

const OPTIONAL_TEXT: &[&str] = &[
    "layout",
    "oracle_text",
    "flavor_text",
    "power",
    "toughness",
    "loyalty",
    "life_modifier",
    "hand_modifier",
    "watermark",
];

// ---------------------------------------------------------------------------
// Presence
// ---------------------------------------------------------------------------

#[test]
fn well_formed_cards_pass() {
    assert!(validate(&lightning_bolt()).is_ok());
    assert!(validate(&legions_landing()).is_ok());
}

#[test]
fn absent_required_fields_are_rejected() {
    for field in REQUIRED {
        let err = validate(&without(lightning_bolt(), field)).unwrap_err();
        assert!(
            err.message().contains(&format!("{} is required", field)),
            "{}: {}",
            field,
            err
        );
    }
}

#[test]
fn absent_optional_fields_are_accepted() {
    let mut record = legions_landing();
    for field in OPTIONAL_TEXT
        .iter()
        .chain(["card_faces", "related_cards", "multiverse_ids", "color_indicator"].iter())
    {
        record = without(record, field);
    }
    assert!(validate(&record).is_ok());
}

#[test]
fn empty_optional_strings_are_rejected() {
    for field in OPTIONAL_TEXT {
        let err = validate(&with(lightning_bolt(), field, json!(""))).unwrap_err();
        assert!(err.message().contains(field), "{}: {}", field, err);
    }
}

#[test]
fn empty_mana_cost_is_no_cost() {
    assert!(validate(&with(lightning_bolt(), "mana_cost", json!(""))).is_ok());
}

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

#[test]
fn color_arrays_may_be_empty() {
    for field in ["colors", "color_identity", "color_indicator"] {
        assert!(validate(&with(lightning_bolt(), field, json!([]))).is_ok(), "{}", field);
    }
}

#[test]
fn color_arrays_reject_duplicates() {
    for field in ["colors", "color_identity", "color_indicator"] {
        let err = validate(&with(lightning_bolt(), field, json!(["R", "G", "R"]))).unwrap_err();
        assert!(err.message().contains("duplicate"), "{}: {}", field, err);
    }
}

#[test]
fn color_arrays_reject_unknown_letters() {
    for field in ["colors", "color_identity", "color_indicator"] {
        assert!(validate(&with(lightning_bolt(), field, json!(["P"]))).is_err(), "{}", field);
    }
}

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

#[test]
fn collector_number_rules() {
    assert!(card::validate_collector_number(Some(&json!("5a"))).is_ok());
    assert!(card::validate_collector_number(Some(&json!("5a?"))).is_err());
    assert!(card::validate_collector_number(Some(&json!(""))).is_err());
}

#[test]
fn image_uri_rules() {
    assert!(card::validate_image_uri(Some(&json!("http://example.com/image.png"))).is_ok());
    assert!(card::validate_image_uri(Some(&json!("http://example.com/image.jpg"))).is_err());
    assert!(card::validate_image_uri(Some(&json!("http//example.com/image.png"))).is_err());
}

#[test]
fn mana_cost_is_tokenized() {
    assert!(validate(&with(lightning_bolt(), "mana_cost", json!("{5}{B}{B}"))).is_ok());
    assert!(validate(&with(lightning_bolt(), "mana_cost", json!("{2}{U"))).is_ok());
    assert!(validate(&with(lightning_bolt(), "mana_cost", json!("R"))).is_err());
    assert!(validate(&with(lightning_bolt(), "mana_cost", json!("{K}"))).is_err());
}

#[test]
fn numeric_fields_reject_negatives_and_strings() {
    for field in ["converted_mana_cost", "usd_price", "tix_price", "eur_price"] {
        assert!(validate(&with(lightning_bolt(), field, json!(-1))).is_err(), "{}", field);
        assert!(validate(&with(lightning_bolt(), field, json!("1"))).is_err(), "{}", field);
    }
    assert!(validate(&with(lightning_bolt(), "multiverse_ids", json!([1, -2]))).is_err());
    assert!(validate(&with(lightning_bolt(), "multiverse_ids", json!(442130))).is_err());
}

#[test]
fn rank_fields_only_need_to_be_numeric() {
    for field in ["edhrec_rank", "story_spotlight_number"] {
        assert!(validate(&with(lightning_bolt(), field, json!(-3))).is_ok(), "{}", field);
        assert!(validate(&with(lightning_bolt(), field, json!(12.5))).is_ok(), "{}", field);
        assert!(validate(&with(lightning_bolt(), field, json!("12"))).is_err(), "{}", field);
    }
}

#[test]
fn enumerated_fields_are_exact() {
    assert!(validate(&with(lightning_bolt(), "rarity", json!("Uncommon"))).is_err());
    assert!(validate(&with(lightning_bolt(), "frame", json!("2016"))).is_err());
    assert!(validate(&with(lightning_bolt(), "border_color", json!("red"))).is_err());
    assert!(validate(&with(lightning_bolt(), "layout", json!("double"))).is_err());
    assert!(validate(&with(lightning_bolt(), "watermark", json!("izzet"))).is_ok());
    assert!(validate(&with(lightning_bolt(), "power", json!("*"))).is_ok());
    assert!(validate(&with(lightning_bolt(), "toughness", json!("banana"))).is_err());
    assert!(validate(&with(lightning_bolt(), "loyalty", json!("3"))).is_ok());
}

#[test]
fn legality_flags_must_be_booleans() {
    let mut record = lightning_bolt();
    record["legality"]["duel"] = json!("legal");
    let err = validate(&record).unwrap_err();
    assert!(err.message().contains("legality.duel"));
}

#[test]
fn story_spotlight_uri_must_be_url() {
    assert!(validate(&with(lightning_bolt(), "story_spotlight_uri", json!("not a url"))).is_err());
    assert!(validate(&with(
        lightning_bolt(),
        "story_spotlight_uri",
        json!("https://magic.wizards.com/story")
    ))
    .is_ok());
}

// ---------------------------------------------------------------------------
// Delegation to the set contract
// ---------------------------------------------------------------------------

#[test]
fn set_code_failure_keeps_root_cause() {
    let root = set::validate_set_code(Some(&json!("A-25"))).unwrap_err();
    let err = validate(&with(lightning_bolt(), "set_code", json!("A-25"))).unwrap_err();
    assert!(err.message().starts_with("card set_code invalid"));
    assert!(err.message().contains(root.message()));
}

#[test]
fn set_name_and_is_digital_are_delegated() {
    let err = validate(&with(lightning_bolt(), "set_name", json!(""))).unwrap_err();
    assert!(err.message().starts_with("card set_name invalid"));

    let err = validate(&with(lightning_bolt(), "is_digital", json!("no"))).unwrap_err();
    assert!(err.message().starts_with("card is_digital error"));
    assert!(err.message().contains("is_digital must be a boolean"));
}

// ---------------------------------------------------------------------------
// Nested structures
// ---------------------------------------------------------------------------

#[test]
fn nested_arrays_must_be_non_empty_arrays() {
    for field in ["card_faces", "related_cards"] {
        assert!(validate(&with(legions_landing(), field, json!([]))).is_err(), "{}", field);
        assert!(validate(&with(legions_landing(), field, json!({}))).is_err(), "{}", field);
    }
}

#[test]
fn face_failure_is_wrapped() {
    let mut record = legions_landing();
    record["card_faces"][1]["mana_cost"] = json!("{Q}");
    let err = validate(&record).unwrap_err();
    assert!(err.message().starts_with("Error in card_faces: "));
    assert!(err.message().contains("{Q}"));
}

#[test]
fn face_requires_name() {
    let mut record = legions_landing();
    record["card_faces"][0]
        .as_object_mut()
        .unwrap()
        .remove("name");
    let err = validate(&record).unwrap_err();
    assert_eq!(err.message(), "Error in card_faces: name is required");
}

#[test]
fn related_card_delegates_set_code() {
    let mut record = legions_landing();
    record["related_cards"][0]["set_code"] = json!("T XLN");
    let err = validate(&record).unwrap_err();
    assert!(err.message().starts_with("Error in related_cards: card set_code invalid"));
}

#[test]
fn link_bundles_check_each_present_link() {
    let mut record = lightning_bolt();
    record["purchase_links"]["ebay"] = json!("");
    assert!(validate(&record).is_err());

    let mut record = lightning_bolt();
    record["related_links"]["mtgtop8"] = json!("mtgtop8");
    assert!(validate(&record).is_err());

    assert!(validate(&with(lightning_bolt(), "related_links", json!({}))).is_ok());
}

// ---------------------------------------------------------------------------
// CardApi
// ---------------------------------------------------------------------------

#[test]
fn put_then_get_by_set_and_number() {
    let catalog = Catalog::in_memory();
    catalog.cards().put(&legions_landing()).unwrap();

    let card = catalog.cards().get("XLN", "22a").unwrap().unwrap();
    assert_eq!(card.card_faces.as_ref().map(Vec::len), Some(2));
    assert_eq!(card.key(), "XLN/22a");
    assert!(card.legality.commander);
}

#[test]
fn put_rejects_invalid_card() {
    let catalog = Catalog::in_memory();
    let err = catalog
        .cards()
        .put(&with(lightning_bolt(), "colors", json!(["R", "R"])))
        .unwrap_err();
    assert!(err.is_client_error());
    assert_eq!(catalog.store().len("Card").unwrap(), 0);
}

#[test]
fn require_reports_missing_card() {
    let catalog = common::setup_sample_catalog();
    let err = catalog.cards().require("A25", "999").unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
}
