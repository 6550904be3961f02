// crates/infra/src/exiftool.rs
//! ExifTool adapter.
//!
//! Runs one short-lived `exiftool -json -b -ee -- <file>` process per call.
//! `-b` keeps binary fields (as `base64:` strings) and `-ee` descends into
//! embedded documents. There is no timeout on this call.

use std::path::{Path, PathBuf};

use log::{debug, trace};
use metaextract_ports::tags::TagExtractor;
use metaextract_shared_kernel::{TagMap, TagValue, ToolError, ToolResult};

use crate::process::CommandSpec;

pub const DEFAULT_PROGRAM: &str = "exiftool";

/// Extracts embedded metadata by running ExifTool.
#[derive(Debug, Clone)]
pub struct ExifToolExtractor {
    program: PathBuf,
}

impl ExifToolExtractor {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into() }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn command(&self, path: &Path) -> CommandSpec {
        CommandSpec::new(&self.program).args(["-json", "-b", "-ee", "--"]).arg(path)
    }
}

impl Default for ExifToolExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl TagExtractor for ExifToolExtractor {
    fn extract_tags(&self, path: &Path) -> ToolResult<TagMap> {
        let output = self.command(path).run()?;
        trace!("exiftool wrote {} bytes for {}", output.stdout.len(), path.display());

        // ExifTool exits 1 for unreadable files but still prints a JSON record
        // carrying an `Error` field; the record is the better diagnostic.
        match parse_records(&output.program, &output.stdout, path) {
            Err(ToolError::NoMetadata) if !output.success() => Err(output.exit_error()),
            Err(ToolError::Parse { .. }) if !output.success() => Err(output.exit_error()),
            result => {
                if let Ok(tags) = &result {
                    debug!("exiftool extracted {} tag(s) from {}", tags.len(), path.display());
                }
                result
            }
        }
    }
}

/// Parse ExifTool's `-json` output and return the record of the first file.
///
/// Empty output or an empty array is `ToolError::NoMetadata`; a record with
/// an `Error` field becomes `ToolError::FileError`.
pub fn parse_records(program: &str, stdout: &[u8], path: &Path) -> ToolResult<TagMap> {
    if stdout.iter().all(u8::is_ascii_whitespace) {
        return Err(ToolError::NoMetadata);
    }

    let records: Vec<TagMap> = serde_json::from_slice(stdout).map_err(|err| ToolError::Parse {
        program: program.to_string(),
        details: err.to_string(),
    })?;

    let Some(record) = records.into_iter().next() else {
        return Err(ToolError::NoMetadata);
    };

    if let Some(message) = record.get("Error") {
        return Err(ToolError::FileError { path: path.to_path_buf(), message: error_message(message) });
    }

    Ok(record)
}

fn error_message(value: &TagValue) -> String {
    match value.as_str() {
        Some(message) => message.to_string(),
        None => value.to_string(),
    }
}
