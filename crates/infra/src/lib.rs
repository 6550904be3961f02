// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod exiftool;
pub mod filesystem;
pub mod platform;
pub mod process;
pub mod trid;

pub use exiftool::ExifToolExtractor;
pub use filesystem::StdFileStatProvider;
pub use trid::TridIdentifier;
