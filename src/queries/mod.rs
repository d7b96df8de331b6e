//! Entity operations for the catalog.
//!
//! Each module provides an API struct that borrows a [`Store`](crate::store::Store)
//! and exposes validate / put / get / query methods returning `Result<T>` with
//! typed model payloads.

pub mod cards;
pub mod sets;

pub use cards::{build_card_query, CardApi, CARD_FILTERS};
pub use sets::{build_set_query, SetApi, SET_FILTERS};
