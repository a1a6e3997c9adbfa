//! Procedural tile-grid layout generator for a hand-tuned city district
//!
//! A fixed 48×48 grid is composed in one sequential pass: a street and avenue network,
//! a literal building catalog, street trees, benches, a paved park, statues and flower
//! bushes. The finished grid is wrapped with scene metadata into a JSON document for a
//! rendering client. Structural placement is deterministic; only decorative variant
//! choices draw from the injected random source.

#![forbid(unsafe_code)]

/// Road, building and decoration passes and their orchestration
pub mod generation;
/// Input/output operations and error handling
pub mod io;
/// Footprint validation and structure placement
pub mod placement;
/// Declarative layout recipe and the built-in district catalog
pub mod recipe;
/// Grid storage and cell records
pub mod spatial;

pub use io::error::{GenerationError, Result};
