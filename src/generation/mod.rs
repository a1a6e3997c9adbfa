//! District generation passes and their orchestration

/// Stage orchestration and composition reporting
pub mod composer;
/// Street trees, benches, statues and flowers
pub mod decoration;
/// Park composition
pub mod park;
/// Road segment patterns and network stamping
pub mod roads;

pub use composer::{CompositionReport, Stage, compose, compose_with};
