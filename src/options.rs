// src/options.rs
use std::{path::PathBuf, time::Duration};

use derive_builder::Builder;
use metaextract_infra::{exiftool, trid};
use serde::{Deserialize, Serialize};

/// Extractor configuration, fixed at construction.
///
/// Deserializable so embedding applications can keep it in their own config
/// files; missing fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(default, setter(into))]
#[serde(default)]
pub struct Options {
    /// TrID executable; resolved through `PATH` when relative.
    pub trid_path: PathBuf,

    /// TrID definitions package (`triddefs.trd`). TrID looks next to its
    /// own binary when unset.
    #[builder(setter(into, strip_option))]
    pub trid_defs: Option<PathBuf>,

    /// Upper bound on the TrID run. Zero selects the default of 10 seconds.
    pub trid_timeout: Duration,

    /// Maximum number of candidate types requested from TrID; `<= 0` selects 5.
    pub trid_matches: i32,

    /// ExifTool executable override.
    #[builder(setter(into, strip_option))]
    pub exiftool_path: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            trid_path: PathBuf::from(trid::DEFAULT_PROGRAM),
            trid_defs: None,
            trid_timeout: trid::DEFAULT_TIMEOUT,
            trid_matches: trid::DEFAULT_MATCHES as i32,
            exiftool_path: None,
        }
    }
}

impl Options {
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// Replace out-of-range values with their defaults.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.trid_path.as_os_str().is_empty() {
            self.trid_path = PathBuf::from(trid::DEFAULT_PROGRAM);
        }
        if self.trid_timeout.is_zero() {
            self.trid_timeout = trid::DEFAULT_TIMEOUT;
        }
        if self.trid_matches <= 0 {
            self.trid_matches = trid::DEFAULT_MATCHES as i32;
        }
        self
    }

    /// `trid_matches` as a count, after defaulting.
    pub fn match_count(&self) -> usize {
        usize::try_from(self.trid_matches).ok().filter(|n| *n > 0).unwrap_or(trid::DEFAULT_MATCHES)
    }

    pub fn exiftool_program(&self) -> PathBuf {
        self.exiftool_path.clone().unwrap_or_else(|| PathBuf::from(exiftool::DEFAULT_PROGRAM))
    }
}
