//! Input/output front ends around the evolver
//!
//! This module contains:
//! - Error types shared by the whole crate
//! - Constants and defaults
//! - JSON request/response shapes and paint mask loading
//! - PNG export, GIF visualization and progress display
//! - The command-line session

/// Command-line parsing and job execution
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types and constructors
pub mod error;
/// Tile palette and PNG export
pub mod image;
/// Paint mask file loading
pub mod paint;
/// Round progress display
pub mod progress;
/// JSON request and response shapes
pub mod request;
/// Per-round GIF capture
pub mod visualization;
