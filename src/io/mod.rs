//! Input/output: configuration, errors, document assembly and artifact export

/// Command-line parsing and run orchestration
pub mod cli;
/// Generation constants and scene defaults
pub mod configuration;
/// Output document assembly
pub mod document;
/// Error types
pub mod error;
/// PNG preview rendering
pub mod image;
/// Stage progress display
pub mod progress;
