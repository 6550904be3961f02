//! # metaextract
//!
//! Gathers everything knowable about a file in one call: filesystem size
//! and timestamps, ranked content-based type candidates from TrID, and the
//! embedded tags ExifTool can read. The record flags files whose extension
//! disagrees with their detected type.
//!
//! ```no_run
//! use metaextract::{MetaExtractor, Options};
//!
//! let extractor = MetaExtractor::new(Options::builder().trid_defs("/usr/share/trid/triddefs.trd").build()?);
//! match extractor.extract("upload.doc") {
//!     Ok(meta) if meta.ext_mismatch() => println!("{} is really {:?}", meta.name(), meta.top_type()),
//!     Ok(meta) => println!("{} tags", meta.tags().len()),
//!     Err(failure) => eprintln!("{failure} (partial: {:?})", failure.metadata().name()),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod extractor;
pub mod options;

pub use extractor::MetaExtractor;
pub use metaextract_domain::{
    FileExtension, FileName, FileSize, FileTimes, FileType, Metadata, TagMap, TagValue, extension_mismatch,
};
pub use metaextract_shared_kernel::{ErrorContext, ErrorKind, MetaExtractError, ToolError};
pub use metaextract_usecase::{ExtractFailure, ExtractMetadata};
pub use options::{Options, OptionsBuilder, OptionsBuilderError};

/// Adapter traits, for plugging other tools into [`ExtractMetadata`].
pub use metaextract_ports as ports;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
