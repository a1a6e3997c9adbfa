//! Declarative layout recipe: the literal catalogs the composer consumes

/// The built-in district catalog
pub mod catalog;
/// Recipe record types and validation
pub mod records;

pub use records::{BuildingSpec, ParkSpec, Recipe, Side, StatueSpec, TreeLine};
