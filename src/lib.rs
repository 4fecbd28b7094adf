//! University and degree program finder.
//!
//! The `data` module is UI-free: the catalog filter is a pure function over an
//! injected [`data::model::Catalog`] and a [`data::filter::FilterCriteria`]
//! snapshot. `state` keeps the UI-facing selections, `color` the badge
//! palette.

pub mod color;
pub mod data;
pub mod state;
