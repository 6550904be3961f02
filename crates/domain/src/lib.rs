//! # Domain
//!
//! The merged metadata record and the rule that flags a disagreement
//! between a file's extension and its detected type.

#![allow(clippy::multiple_crate_versions)]

pub mod mismatch;
pub mod model;
pub mod value_objects;

pub use mismatch::extension_mismatch;
pub use model::{FileType, Metadata};

pub use value_objects::{FileExtension, FileName, FileSize, FileTimes, TagMap, TagValue};
