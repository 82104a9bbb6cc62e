//! Widget board state for the **tileboard** dashboard.
//!
//! This crate holds everything about the dashboard that is not drawing:
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`WidgetKind`] | Open tag naming what a widget shows |
//! | [`Catalog`] / [`CatalogEntry`] | Read-only list of kinds the picker offers |
//! | [`Selection`] | Kinds toggled on while the picker is open |
//! | [`Board`] | Ordered active widgets plus the add/remove flow |
//!
//! The board is a plain struct with no I/O, so it can be driven directly
//! from tests or from any UI event loop.

pub mod board;
pub mod catalog;
pub mod kind;
pub mod selection;

pub use board::{ActiveWidget, Board, PickerState, WidgetId};
pub use catalog::{default_seed, Catalog, CatalogEntry, CatalogError};
pub use kind::WidgetKind;
pub use selection::Selection;
