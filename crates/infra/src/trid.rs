// crates/infra/src/trid.rs
//! TrID adapter.
//!
//! Invokes `trid <file> -n:<matches> [-d:<defs>] -v` and parses its text
//! report. A verbose result block looks like:
//!
//! ```text
//!  77.8% (.PDF) Adobe Portable Document Format (5000/1/1)
//!         Mime type       : application/pdf
//!         Related URL     : https://www.adobe.com/
//! ```

use std::{
    borrow::Cow,
    path::{Path, PathBuf},
    sync::OnceLock,
    time::Duration,
};

use log::debug;
use metaextract_ports::file_type::{FileTypeIdentifier, FileTypeMatch};
use metaextract_shared_kernel::{ToolError, ToolResult};
use regex::Regex;

use crate::process::CommandSpec;

pub const DEFAULT_PROGRAM: &str = "trid";
pub const DEFAULT_MATCHES: usize = 5;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Identifies file types by running the TrID command line tool.
#[derive(Debug, Clone)]
pub struct TridIdentifier {
    program: PathBuf,
    definitions: Option<PathBuf>,
    timeout: Duration,
    max_matches: usize,
}

impl TridIdentifier {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            definitions: None,
            timeout: DEFAULT_TIMEOUT,
            max_matches: DEFAULT_MATCHES,
        }
    }

    #[must_use]
    pub fn with_definitions(mut self, definitions: impl Into<PathBuf>) -> Self {
        self.definitions = Some(definitions.into());
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Zero falls back to [`DEFAULT_MATCHES`].
    #[must_use]
    pub fn with_max_matches(mut self, max_matches: usize) -> Self {
        self.max_matches = if max_matches == 0 { DEFAULT_MATCHES } else { max_matches };
        self
    }

    pub fn max_matches(&self) -> usize {
        self.max_matches
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn command(&self, path: &Path) -> CommandSpec {
        let mut spec = CommandSpec::new(&self.program)
            .arg(file_operand(path).as_os_str())
            .arg(format!("-n:{}", self.max_matches));
        if let Some(defs) = &self.definitions {
            let mut flag = std::ffi::OsString::from("-d:");
            flag.push(defs);
            spec = spec.arg(flag);
        }
        spec.arg("-v").timeout(self.timeout)
    }
}

/// TrID has no `--`; a relative path that looks like a switch is anchored
/// to the current directory instead.
fn file_operand(path: &Path) -> Cow<'_, Path> {
    if path.as_os_str().as_encoded_bytes().starts_with(b"-") {
        Cow::Owned(Path::new(".").join(path))
    } else {
        Cow::Borrowed(path)
    }
}

impl Default for TridIdentifier {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl FileTypeIdentifier for TridIdentifier {
    fn identify(&self, path: &Path) -> ToolResult<Vec<FileTypeMatch>> {
        let output = self.command(path).run()?.into_checked()?;
        let report = output.stdout_lossy();

        if let Some(message) = report_error(&report) {
            return Err(ToolError::FileError { path: path.to_path_buf(), message });
        }

        let mut matches = parse_report(&report);
        matches.truncate(self.max_matches);
        debug!("trid reported {} candidate(s) for {}", matches.len(), path.display());
        Ok(matches)
    }
}

fn result_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(\d+(?:\.\d+)?)%\s+\(([^)]*)\)\s+(.*?)(?:\s+\(\d+(?:/\d+)*\))?\s*$")
            .expect("valid trid result pattern")
    })
}

fn mime_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s+Mime type\s*:\s*(.*?)\s*$").expect("valid trid mime pattern"))
}

/// Parse a TrID report into candidates in the order reported.
///
/// Extensions are lower-cased; `Unknown!` or a report without result lines
/// yields an empty list.
pub fn parse_report(report: &str) -> Vec<FileTypeMatch> {
    let mut matches: Vec<FileTypeMatch> = Vec::new();

    for line in report.lines() {
        if let Some(caps) = result_line().captures(line) {
            matches.push(FileTypeMatch {
                name: caps[3].trim().to_string(),
                mime_type: String::new(),
                extension: caps[2].trim().to_lowercase(),
                probability: caps[1].parse().unwrap_or(0.0),
            });
        } else if let Some(caps) = mime_line().captures(line)
            && let Some(last) = matches.last_mut()
        {
            last.mime_type = caps[1].to_string();
        }
    }

    matches
}

/// TrID reports per-file problems on stdout as `Error: ...` while exiting 0.
fn report_error(report: &str) -> Option<String> {
    report
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("Error:"))
        .map(|message| message.trim().to_string())
}
