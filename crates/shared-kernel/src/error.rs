// crates/shared-kernel/src/error.rs
use std::{path::PathBuf, time::Duration};

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum MetaExtractError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<MetaExtractError>,
    },

    #[error("no file specified")]
    NoFileSpecified,

    #[error("file not found: '{path}'")]
    FileNotFound { path: PathBuf },

    #[error("failed to stat '{path}': {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("type identification failed: {0}")]
    TypeIdentification(#[source] ToolError),

    #[error("tag extraction failed: {0}")]
    TagExtraction(#[source] ToolError),
}

pub type Result<T> = std::result::Result<T, MetaExtractError>;

/// Coarse classification of [`MetaExtractError`], stable across context wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NoFileSpecified,
    FileNotFound,
    Io,
    TypeIdentification,
    TagExtraction,
}

impl MetaExtractError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Context { source, .. } => source.kind(),
            Self::NoFileSpecified => ErrorKind::NoFileSpecified,
            Self::FileNotFound { .. } => ErrorKind::FileNotFound,
            Self::Stat { .. } => ErrorKind::Io,
            Self::TypeIdentification(_) => ErrorKind::TypeIdentification,
            Self::TagExtraction(_) => ErrorKind::TagExtraction,
        }
    }

    /// Failure reported by one of the external tools, if any.
    pub fn tool_error(&self) -> Option<&ToolError> {
        match self {
            Self::Context { source, .. } => source.tool_error(),
            Self::TypeIdentification(err) | Self::TagExtraction(err) => Some(err),
            _ => None,
        }
    }

    /// Map a stat failure onto the distinguished kinds.
    pub fn from_stat(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::Stat { path, source }
        }
    }
}

/// Failures of an external tool invocation.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' timed out after {timeout:?}")]
    Timeout { program: String, timeout: Duration },

    #[error("'{program}' exited with {}: {stderr}", exit_label(.code))]
    ExitStatus {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("failed to parse '{program}' output: {details}")]
    Parse { program: String, details: String },

    #[error("I/O error while running '{program}': {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}': {message}")]
    FileError { path: PathBuf, message: String },

    /// The tool ran but produced nothing for the file.
    #[error("no metadata extracted")]
    NoMetadata,
}

pub type ToolResult<T> = std::result::Result<T, ToolError>;

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}

impl ToolError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    pub fn is_no_metadata(&self) -> bool {
        matches!(self, Self::NoMetadata)
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<MetaExtractError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| MetaExtractError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| MetaExtractError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
