//! Input/output operations and error handling

/// Command-line interface and batch generation driver
pub mod cli;
/// Generator constants and runtime configuration defaults
pub mod configuration;
/// Error types for generation and export
pub mod error;
/// PNG export of composited maps
pub mod image;
/// Progress display for batch generation
pub mod progress;
