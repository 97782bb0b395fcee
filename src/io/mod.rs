//! Input/output operations and error handling

/// Command-line parsing and the end-to-end processor
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// Image decoding and PNG export
pub mod image;
/// Progress display
pub mod progress;
/// Local and remote source resolution
pub mod source;
