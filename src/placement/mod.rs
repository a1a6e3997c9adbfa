//! Footprint validation and structure placement

/// Multi-cell building placement
pub mod building;
/// Single-cell prop overlays
pub mod prop;
/// Footprint clearance checks
pub mod validator;

pub use building::PlacementRequest;
pub use validator::{can_place, can_place_on};
