//! # goanno
//!
//! Core library for the Go model doc-comment annotator.
//!
//! Walks a flat directory of Go source files, recognizes exported type
//! declarations and exported methods on a designated receiver type by
//! line shape, and inserts a synthesized doc comment above any
//! declaration that lacks one. Running the tool over its own output is
//! a no-op.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Line-by-line annotation pass
pub mod annotator;

/// Run configuration: defaults, TOML file, CLI overrides
pub mod config;

/// Error types for the goanno library
pub mod error;

/// Line-shape recognition for Go declarations
pub mod matcher;

/// Convention-driven comment synthesis
pub mod synthesizer;

/// Flat directory enumeration and in-place rewriting
pub mod walker;
