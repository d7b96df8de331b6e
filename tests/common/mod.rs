//! Shared test fixtures for the catalog integration tests.
//!
//! Provides well-formed sample set and card records plus helpers to tweak a
//! single field, and `setup_sample_catalog()` which stores a few of them in an
//! in-memory catalog.

#![allow(dead_code)]

use mtg_catalog::{Catalog, MemoryStore};
use serde_json::{json, Value};

pub fn ixalan() -> Value {
    json!({
        "set_code": "XLN",
        "set_name": "Ixalan",
        "release_date": "2017-09-29",
        "set_type": "expansion",
        "card_count": 289,
        "block_code": "xln",
        "block_name": "Ixalan",
        "icon_uri": "https://img.example.com/sets/xln.svg",
        "is_digital": false,
        "is_foil": false
    })
}

pub fn rivals_of_ixalan() -> Value {
    json!({
        "set_code": "RIX",
        "set_name": "Rivals of Ixalan",
        "release_date": "2018-01-19",
        "set_type": "expansion",
        "card_count": 205,
        "block_code": "xln",
        "block_name": "Ixalan",
        "icon_uri": "https://img.example.com/sets/rix.svg",
        "is_digital": false
    })
}

pub fn masters_25() -> Value {
    json!({
        "set_code": "A25",
        "set_name": "Masters 25",
        "release_date": "2018-03-16",
        "set_type": "masters",
        "card_count": 249,
        "icon_uri": "https://img.example.com/sets/a25.svg"
    })
}

fn legality() -> Value {
    json!({
        "standard": false,
        "future": false,
        "frontier": false,
        "modern": true,
        "legacy": true,
        "pauper": true,
        "vintage": true,
        "penny": false,
        "commander": true,
        "one_v_one": true,
        "duel": true
    })
}

pub fn lightning_bolt() -> Value {
    json!({
        "name": "Lightning Bolt",
        "type_line": "Instant",
        "mana_cost": "{R}",
        "converted_mana_cost": 1,
        "colors": ["R"],
        "color_identity": ["R"],
        "legality": legality(),
        "is_reserved": false,
        "is_reprint": true,
        "set_code": "A25",
        "set_name": "Masters 25",
        "collector_number": "141",
        "is_digital": false,
        "rarity": "uncommon",
        "artist": "Christopher Moeller",
        "frame": "2015",
        "is_full_art": false,
        "border_color": "black",
        "is_timeshifted": false,
        "is_colorshifted": false,
        "is_futureshifted": false,
        "image_uri": "https://img.example.com/cards/a25/141.png",
        "multiverse_ids": [442130],
        "layout": "normal",
        "oracle_text": "Lightning Bolt deals 3 damage to any target.",
        "usd_price": 1.25,
        "related_links": {
            "gatherer": "https://gatherer.wizards.com/Pages/Card/Details.aspx?multiverseid=442130",
            "edhrec": "https://edhrec.com/route/?cc=Lightning+Bolt"
        },
        "purchase_links": {
            "tcgplayer": "https://shop.tcgplayer.com/magic/masters-25/lightning-bolt"
        }
    })
}

pub fn counterspell() -> Value {
    let mut card = lightning_bolt();
    set_field(&mut card, "name", json!("Counterspell"));
    set_field(&mut card, "mana_cost", json!("{U}{U}"));
    set_field(&mut card, "converted_mana_cost", json!(2));
    set_field(&mut card, "colors", json!(["U"]));
    set_field(&mut card, "color_identity", json!(["U"]));
    set_field(&mut card, "collector_number", json!("50"));
    set_field(&mut card, "rarity", json!("common"));
    set_field(&mut card, "artist", json!("Zack Stella"));
    set_field(&mut card, "oracle_text", json!("Counter target spell."));
    set_field(&mut card, "image_uri", json!("https://img.example.com/cards/a25/50.png"));
    card
}

/// A two-faced card from Ixalan with a collector number suffix.
pub fn legions_landing() -> Value {
    json!({
        "name": "Legion's Landing // Adanto, the First Fort",
        "type_line": "Legendary Enchantment // Legendary Land",
        "mana_cost": "{W}",
        "converted_mana_cost": 1,
        "colors": ["W"],
        "color_identity": ["W"],
        "legality": legality(),
        "is_reserved": false,
        "is_reprint": false,
        "set_code": "XLN",
        "set_name": "Ixalan",
        "collector_number": "22a",
        "is_digital": false,
        "rarity": "rare",
        "artist": "Ryan Pancoast",
        "frame": "2015",
        "is_full_art": false,
        "border_color": "black",
        "is_timeshifted": false,
        "is_colorshifted": false,
        "is_futureshifted": false,
        "image_uri": "https://img.example.com/cards/xln/22a.png",
        "layout": "transform",
        "card_faces": [
            {
                "name": "Legion's Landing",
                "type_line": "Legendary Enchantment",
                "mana_cost": "{W}",
                "oracle_text": "When Legion's Landing enters the battlefield, create a 1/1 white Vampire creature token with lifelink.",
                "colors": ["W"]
            },
            {
                "name": "Adanto, the First Fort",
                "type_line": "Legendary Land",
                "mana_cost": "",
                "oracle_text": "{T}: Add {W}.",
                "color_indicator": ["W"]
            }
        ],
        "related_cards": [
            { "name": "Vampire", "set_code": "TXLN", "collector_number": "2" }
        ]
    })
}

pub fn set_field(record: &mut Value, field: &str, value: Value) {
    record
        .as_object_mut()
        .expect("fixture is an object")
        .insert(field.to_string(), value);
}

pub fn without(mut record: Value, field: &str) -> Value {
    record
        .as_object_mut()
        .expect("fixture is an object")
        .remove(field);
    record
}

pub fn with(mut record: Value, field: &str, value: Value) -> Value {
    set_field(&mut record, field, value);
    record
}

/// An in-memory catalog holding three sets and three cards.
pub fn setup_sample_catalog() -> Catalog<MemoryStore> {
    let catalog = Catalog::in_memory();
    for set in [ixalan(), rivals_of_ixalan(), masters_25()] {
        catalog.sets().put(&set).unwrap();
    }
    for card in [lightning_bolt(), counterspell(), legions_landing()] {
        catalog.cards().put(&card).unwrap();
    }
    catalog
}
