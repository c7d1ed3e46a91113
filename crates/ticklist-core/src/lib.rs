//! Ticklist Core — shared types, errors, and utilities.
//!
//! This crate provides the foundational types used across all Ticklist crates.
//! It has no internal Ticklist dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error taxonomy and Result alias
//! - [`duration`]: Completion-time formatting
//! - [`columns`]: Checklist-to-spreadsheet-column mapping
//! - [`config`]: Immutable application configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod columns;
pub mod config;
pub mod duration;
pub mod error;

// Re-export key types at crate root for convenience
pub use columns::{ColumnMap, SheetColumn};
pub use config::AppConfig;
pub use duration::format_duration;
pub use error::{Error, Result};
