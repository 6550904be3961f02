// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{ErrorContext, ErrorKind, MetaExtractError, Result, ToolError, ToolResult};

pub mod error;
pub mod value_objects;

pub use value_objects::{FileExtension, FileName, FileSize, FileTimes, TagMap, TagValue};
