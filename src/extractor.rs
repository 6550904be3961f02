// src/extractor.rs
use std::path::Path;

use log::debug;
use metaextract_domain::Metadata;
use metaextract_infra::{ExifToolExtractor, StdFileStatProvider, TridIdentifier};
use metaextract_usecase::{ExtractFailure, ExtractMetadata};

use crate::options::Options;

/// Configured extraction entry point.
///
/// Holds no per-call state: each [`extract`](Self::extract) spawns its own
/// TrID and ExifTool processes, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct MetaExtractor {
    options: Options,
    files: StdFileStatProvider,
    trid: TridIdentifier,
    exiftool: ExifToolExtractor,
}

impl MetaExtractor {
    pub fn new(options: Options) -> Self {
        let options = options.normalized();

        let mut trid = TridIdentifier::new(&options.trid_path)
            .with_timeout(options.trid_timeout)
            .with_max_matches(options.match_count());
        if let Some(defs) = &options.trid_defs {
            trid = trid.with_definitions(defs);
        }
        let exiftool = ExifToolExtractor::new(options.exiftool_program());

        debug!(
            "metaextract configured: trid={} matches={} timeout={:?} exiftool={}",
            options.trid_path.display(),
            trid.max_matches(),
            trid.timeout(),
            exiftool.program().display()
        );

        Self { options, files: StdFileStatProvider::new(), trid, exiftool }
    }

    /// Effective configuration, defaults applied.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Stat `path`, identify its type, check the extension and read its tags.
    ///
    /// # Errors
    ///
    /// `NoFileSpecified` for an empty path, `FileNotFound` for a missing
    /// entry, `Stat` for other filesystem failures, then
    /// `TypeIdentification` or `TagExtraction` for tool failures. The
    /// failure carries whatever was gathered before the failing step.
    pub fn extract(&self, path: impl AsRef<Path>) -> Result<Metadata, ExtractFailure> {
        ExtractMetadata::new(&self.files, &self.trid, &self.exiftool).run(path.as_ref())
    }

    /// Extract each path in turn; results keep the input order.
    pub fn extract_batch<I, P>(&self, paths: I) -> Vec<Result<Metadata, ExtractFailure>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        paths.into_iter().map(|path| self.extract(path)).collect()
    }
}

impl Default for MetaExtractor {
    fn default() -> Self {
        Self::new(Options::default())
    }
}
