use std::path::PathBuf;

/// Storage kind for set documents.
pub const SET_KIND: &str = "Set";
/// Storage kind for card documents.
pub const CARD_KIND: &str = "Card";

/// Sort key applied when a set filter carries no recognized field.
pub const SET_DEFAULT_SORT: &str = "set_name";
/// Sort key applied when a card filter carries no recognized field.
pub const CARD_DEFAULT_SORT: &str = "name";

/// Map a storage kind to the document table that holds it.
pub fn table_for_kind(kind: &str) -> Option<&'static str> {
    match kind {
        SET_KIND => Some("sets"),
        CARD_KIND => Some("cards"),
        _ => None,
    }
}

pub fn default_database_path() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("mtg-catalog").join("catalog.duckdb")
    } else {
        PathBuf::from(".mtg-catalog").join("catalog.duckdb")
    }
}
