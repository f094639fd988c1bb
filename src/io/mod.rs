//! Input/output operations, persistence and error handling

/// Command-line interface and batch processing
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Image decoding into pixel buffers
pub mod image;
/// Batch progress display
pub mod progress;
/// Key-value preference persistence
pub mod store;
