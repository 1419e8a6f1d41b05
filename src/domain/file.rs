//! File - Content Item Types
//!
//! View-model types for the file shown in the preview header. Field names
//! mirror the upstream content API payload.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A specific stored version of a file
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FileVersion {
    /// Version identifier
    #[serde(default)]
    pub id: Option<String>,
}

/// The file being previewed
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PreviewFile {
    /// File identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// File extension (e.g. "doc", "pdf")
    #[serde(default)]
    pub extension: Option<String>,
    /// Current version of the file
    #[serde(default)]
    pub file_version: Option<FileVersion>,
}

impl PreviewFile {
    /// Parse a file object from an API JSON payload
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// True when the file carries a usable (non-empty) identifier
    pub fn has_id(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.is_empty())
    }

    /// Identifier of the nested file version, if any
    pub fn version_id(&self) -> Option<&str> {
        self.file_version.as_ref()?.id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_full_payload() {
        let file = PreviewFile::from_json(
            r#"{"id":"123","name":"report.doc","extension":"doc","file_version":{"id":"1"}}"#,
        )
        .expect("valid payload");
        assert_eq!(file.id.as_deref(), Some("123"));
        assert_eq!(file.extension.as_deref(), Some("doc"));
        assert_eq!(file.version_id(), Some("1"));
    }

    #[test]
    fn test_from_json_sparse_payload() {
        let file = PreviewFile::from_json(r#"{"id":"123"}"#).expect("valid payload");
        assert!(file.has_id());
        assert_eq!(file.extension, None);
        assert_eq!(file.version_id(), None);
    }

    #[test]
    fn test_has_id_rejects_empty() {
        assert!(!PreviewFile::default().has_id());
        let file = PreviewFile {
            id: Some(String::new()),
            ..Default::default()
        };
        assert!(!file.has_id());
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(PreviewFile::from_json("{not json").is_err());
    }
}
