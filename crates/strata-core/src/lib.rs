//! # strata-core
//!
//! Core types, ID generation, and error types for Strata.
//!
//! This crate provides the foundational types shared across all Strata crates:
//! - `Coordinate`, the named latitude/longitude record used everywhere
//! - Entity structs for grids, cells, finding locations, measurements and map layers
//! - Mode, status and layer enums (with the grid unit status state machine)
//! - ID prefix constants and generation
//! - Cross-cutting error types
//! - CLI response types

pub mod coordinate;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;

pub use coordinate::Coordinate;
