// crates/shared-kernel/src/value_objects/mod.rs
pub mod file_info;
pub mod file_times;
pub mod tag_value;

pub use file_info::{FileExtension, FileName, FileSize};
pub use file_times::FileTimes;
pub use tag_value::{TagMap, TagValue};
