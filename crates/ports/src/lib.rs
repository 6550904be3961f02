//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract the three collaborators of an
//! extraction:
//!
//! - [`filesystem`]: stat-like queries (size, name, timestamps)
//! - [`file_type`]: signature based file type identification
//! - [`tags`]: embedded metadata extraction
//!
//! These ports keep the orchestration independent of the concrete tools.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod file_type;
pub mod filesystem;
pub mod tags;
