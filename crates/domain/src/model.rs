pub mod file_type;
pub mod metadata;

pub use file_type::FileType;
pub use metadata::Metadata;
