//! Closed enumerations for catalog fields.
//!
//! Each [`Domain`] is an exact, case-sensitive set of legal literals.

use serde_json::Value;

use super::checks;
use crate::error::{Validation, ValidationError};

/// A named closed set of legal string values.
#[derive(Debug, Clone, Copy)]
pub struct Domain {
    name: &'static str,
    values: &'static [&'static str],
}

impl Domain {
    pub const fn new(name: &'static str, values: &'static [&'static str]) -> Self {
        Self { name, values }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn values(&self) -> &'static [&'static str] {
        self.values
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(&value)
    }

    /// Require `value` to be a non-empty string from this domain.
    pub fn check(&self, value: &Value, field: &str) -> Validation {
        let s = checks::non_empty_string(value, field)?;
        self.check_str(s, field)
    }

    pub fn check_str(&self, value: &str, field: &str) -> Validation {
        if self.contains(value) {
            Ok(())
        } else {
            Err(ValidationError::new(format!(
                "{} {:?} is not a valid {}",
                field, value, self.name
            )))
        }
    }
}

pub const SET_TYPES: Domain = Domain::new(
    "set type",
    &[
        "core",
        "expansion",
        "masters",
        "masterpiece",
        "from_the_vault",
        "spellbook",
        "premium_deck",
        "duel_deck",
        "draft_innovation",
        "treasure_chest",
        "commander",
        "planechase",
        "archenemy",
        "vanguard",
        "funny",
        "starter",
        "box",
        "promo",
        "token",
        "memorabilia",
    ],
);

pub const LAYOUTS: Domain = Domain::new(
    "layout",
    &[
        "normal",
        "split",
        "flip",
        "transform",
        "meld",
        "leveler",
        "saga",
        "planar",
        "scheme",
        "vanguard",
        "token",
        "double_faced_token",
        "emblem",
        "augment",
        "host",
    ],
);

pub const COLORS: Domain = Domain::new("color", &["W", "U", "B", "R", "G"]);

pub const RARITIES: Domain = Domain::new("rarity", &["common", "uncommon", "rare", "mythic"]);

pub const FRAMES: Domain = Domain::new("frame", &["1993", "1997", "2003", "2015", "future"]);

pub const BORDER_COLORS: Domain =
    Domain::new("border color", &["black", "borderless", "gold", "silver", "white"]);

pub const WATERMARKS: Domain = Domain::new(
    "watermark",
    &[
        "abzan",
        "agentsofsneak",
        "arena",
        "atarka",
        "azorius",
        "boros",
        "colorpie",
        "conspiracy",
        "crossbreedlabs",
        "dci",
        "dimir",
        "dromoka",
        "flavor",
        "fnm",
        "goblinexplosioneers",
        "golgari",
        "grandprix",
        "gruul",
        "izzet",
        "jeskai",
        "kolaghan",
        "leagueofdastardlydoom",
        "mardu",
        "mirran",
        "mtg",
        "nerf",
        "ojutai",
        "orderofthewidget",
        "orzhov",
        "phyrexian",
        "planeswalker",
        "protour",
        "rakdos",
        "selesnya",
        "set",
        "silumgar",
        "simic",
        "sultai",
        "temur",
        "transformers",
        "wotc",
    ],
);

pub const POWERS: Domain = Domain::new(
    "power",
    &[
        "*", "*²", "1+*", "2+*", "+0", "+1", "+2", "+3", "+4", "-1", "?", "∞", ".5", "1.5",
        "2.5", "3.5", "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13",
        "14", "15", "16", "99",
    ],
);

pub const TOUGHNESSES: Domain = Domain::new(
    "toughness",
    &[
        "*", "*²", "1+*", "2+*", "7-*", "+0", "+1", "+2", "+3", "+4", "-1", "?", ".5", "1.5",
        "2.5", "3.5", "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13",
        "14", "15", "16", "99",
    ],
);

pub const LOYALTIES: Domain = Domain::new(
    "loyalty",
    &[
        "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "20", "X", "*", "1d4+1",
    ],
);

/// Symbols legal inside a mana cost.
///
/// Activation symbols such as `{T}`, `{Q}`, `{E}`, `{PW}` and `{CHAOS}` are not
/// costs and are absent.
pub const MANA_SYMBOLS: Domain = Domain::new(
    "mana symbol",
    &[
        // colors, colorless, snow
        "{W}", "{U}", "{B}", "{R}", "{G}", "{C}", "{S}",
        // variable generic
        "{X}", "{Y}", "{Z}",
        // numeric generic
        "{0}", "{1}", "{2}", "{3}", "{4}", "{5}", "{6}", "{7}", "{8}", "{9}", "{10}", "{11}",
        "{12}", "{13}", "{14}", "{15}", "{16}", "{17}", "{18}", "{19}", "{20}", "{100}",
        "{1000000}", "{∞}",
        // half
        "{½}", "{HW}", "{HR}",
        // hybrid
        "{W/U}", "{W/B}", "{U/B}", "{U/R}", "{B/R}", "{B/G}", "{R/W}", "{R/G}", "{G/W}",
        "{G/U}",
        // monocolored hybrid
        "{2/W}", "{2/U}", "{2/B}", "{2/R}", "{2/G}",
        // phyrexian
        "{P}", "{W/P}", "{U/P}", "{B/P}", "{R/P}", "{G/P}",
    ],
);
