use serde::{Deserialize, Serialize};

/// One candidate type reported by the type identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileType {
    /// Human readable description, e.g. `"Adobe Portable Document Format"`.
    pub name: String,
    pub mime_type: String,
    /// Matched extension as reported; may hold alternatives such as `".jpg/jpeg"`.
    pub extension: String,
    /// Confidence percentage as reported (0–100).
    pub probability: f64,
}

impl FileType {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            extension: extension.into(),
            probability: 0.0,
        }
    }

    #[must_use]
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }
}
