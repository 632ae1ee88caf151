//! # strata-layers
//!
//! View-model over the thematic map layers of a site: which layers are
//! visible, how they are styled, and how many features each one carries.
//!
//! Everything here is pure. [`compose`] never mutates its inputs and the
//! mutators ([`toggle`], [`set_opacity`]) touch exactly one layer.

mod catalog;
mod compose;
mod error;
mod source;

pub use catalog::{default_layers, layer_id};
pub use compose::{compose, hidden_ids, set_opacity, toggle};
pub use error::LayerError;
pub use source::LayerSource;
